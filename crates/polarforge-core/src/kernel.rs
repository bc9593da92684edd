//! Arikan kernel and dense polar matrices
//!
//! The polar transform of length `N = 2^m` is the Kronecker power
//! `G_N = F^{⊗m}` of the kernel `F = [1 0; 1 1]`. Entry `G_N[i][j]` is one
//! exactly when the bits of `j` are a subset of the bits of `i`, so row `i`
//! has weight `2^{w(i)}`.
//!
//! ```text
//!        F            F⊗F
//!     [1 0]       [1 0 0 0]
//!     [1 1]       [1 1 0 0]
//!                 [1 0 1 0]
//!                 [1 1 1 1]
//! ```
//!
//! Given a frozen set, [`dense_polar`] returns the generator matrix (rows of
//! `G_N` at the information positions) and a parity-check matrix (columns
//! of `G_N` at the frozen positions, transposed). Both are dense, so memory
//! grows as `N^2`; lifts above [`MAX_DENSE_LIFT`] are rejected.

use crate::types::{DesignError, DesignResult};

/// Largest Kronecker lift accepted by [`polar_transform_matrix`] and
/// [`dense_polar`]: N = 4096, a 16 MiB matrix.
pub const MAX_DENSE_LIFT: u32 = 12;

/// Dense binary matrix over GF(2), row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMatrix {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl BinaryMatrix {
    /// All-zero matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Build from row vectors. All rows must have the same length.
    pub fn from_rows(rows: &[Vec<u8>]) -> Option<Self> {
        let cols = rows.first().map_or(0, |r| r.len());
        if rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        let data = rows.iter().flatten().map(|&v| v & 1).collect();
        Some(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.data[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, value: u8) {
        self.data[row * self.cols + col] = value & 1;
    }

    /// Row slice.
    pub fn row(&self, row: usize) -> &[u8] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Number of ones in a row.
    pub fn row_weight(&self, row: usize) -> usize {
        self.row(row).iter().filter(|&&v| v != 0).count()
    }

    /// Fraction of non-zero entries.
    pub fn density(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        let ones = self.data.iter().filter(|&&v| v != 0).count();
        ones as f64 / self.data.len() as f64
    }

    /// Kronecker product `self ⊗ other`.
    pub fn kron(&self, other: &BinaryMatrix) -> BinaryMatrix {
        let mut out = BinaryMatrix::zeros(self.rows * other.rows, self.cols * other.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                if self.get(i, j) == 0 {
                    continue;
                }
                for p in 0..other.rows {
                    for q in 0..other.cols {
                        out.set(i * other.rows + p, j * other.cols + q, other.get(p, q));
                    }
                }
            }
        }
        out
    }

    /// Whether `self · otherᵀ` is the zero matrix over GF(2).
    ///
    /// Returns false when the column counts differ.
    pub fn mul_transpose_is_zero(&self, other: &BinaryMatrix) -> bool {
        if self.cols != other.cols {
            return false;
        }
        (0..self.rows).all(|a| {
            (0..other.rows).all(|b| {
                let parity = self
                    .row(a)
                    .iter()
                    .zip(other.row(b))
                    .fold(0u8, |acc, (&x, &y)| acc ^ (x & y));
                parity == 0
            })
        })
    }
}

/// Generator and parity-check matrix of a polar code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensePolar {
    /// Parity-check matrix, `(n - k) x n`.
    pub pcm: BinaryMatrix,
    /// Generator matrix, `k x n`.
    pub gm: BinaryMatrix,
}

/// The `n_lift`-fold Kronecker power of the kernel `[1 0; 1 1]`.
///
/// `n_lift = 0` gives the 1x1 identity.
pub fn polar_transform_matrix(n_lift: u32) -> DesignResult<BinaryMatrix> {
    if n_lift > MAX_DENSE_LIFT {
        return Err(DesignError::LiftTooLarge {
            n_lift,
            max: MAX_DENSE_LIFT,
        });
    }
    let kernel = BinaryMatrix {
        rows: 2,
        cols: 2,
        data: vec![1, 0, 1, 1],
    };
    let mut gm = BinaryMatrix {
        rows: 1,
        cols: 1,
        data: vec![1],
    };
    for _ in 0..n_lift {
        gm = gm.kron(&kernel);
    }
    Ok(gm)
}

/// Apply the polar transform `x = u · F^{⊗m}` in place (butterfly structure).
///
/// # Panics
///
/// Panics if the length is not a power of two.
pub fn polar_transform(bits: &mut [bool]) {
    let n = bits.len();
    assert!(
        n.is_power_of_two(),
        "polar transform length must be a power of two, got {}",
        n
    );
    let mut half = 1;
    while half < n {
        for i in (0..n).step_by(2 * half) {
            for j in 0..half {
                bits[i + j] ^= bits[i + j + half];
            }
        }
        half <<= 1;
    }
}

/// Dense generator and parity-check matrices for a polar code of length `n`
/// with the given frozen positions.
pub fn dense_polar(frozen: &[usize], n: usize) -> DesignResult<DensePolar> {
    if !n.is_power_of_two() {
        return Err(DesignError::NotPowerOfTwo(n as i64));
    }
    let n_lift = n.trailing_zeros();
    if n_lift > MAX_DENSE_LIFT {
        return Err(DesignError::LiftTooLarge {
            n_lift,
            max: MAX_DENSE_LIFT,
        });
    }
    let mut is_frozen = vec![false; n];
    for &pos in frozen {
        if pos >= n {
            return Err(DesignError::InvalidFrozenSet {
                n,
                reason: format!("position {} out of range", pos),
            });
        }
        if is_frozen[pos] {
            return Err(DesignError::InvalidFrozenSet {
                n,
                reason: format!("position {} listed twice", pos),
            });
        }
        is_frozen[pos] = true;
    }

    let g = polar_transform_matrix(n_lift)?;
    let info: Vec<usize> = (0..n).filter(|&i| !is_frozen[i]).collect();

    let mut gm = BinaryMatrix::zeros(info.len(), n);
    for (r, &i) in info.iter().enumerate() {
        for c in 0..n {
            gm.set(r, c, g.get(i, c));
        }
    }

    // H = (columns of G at the frozen positions)ᵀ
    let mut pcm = BinaryMatrix::zeros(frozen.len(), n);
    for (r, &f) in frozen.iter().enumerate() {
        for c in 0..n {
            pcm.set(r, c, g.get(c, f));
        }
    }

    tracing::debug!(
        n,
        k = gm.rows(),
        gm_density = gm.density(),
        pcm_density = pcm.density(),
        "built dense polar matrices"
    );

    Ok(DensePolar { pcm, gm })
}
