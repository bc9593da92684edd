//! Conformance tests for polar and Reed-Muller construction
//!
//! Run with: cargo test -p polarforge-core --test conformance

use polarforge_core::prelude::*;
use polarforge_core::{
    dense_polar, generate_5g_ranking_with, partition_by_weight, ReliabilitySequence,
};

const VALID_N: [i64; 6] = [32, 64, 128, 256, 512, 1024];

// ============================================================================
// Parameter validation
// ============================================================================

#[test]
fn validator_rejects_invalid_parameters() {
    let invalid = [
        (-1, 32),
        (10, -3),
        (33, 32),
        (10, 31),
        (1025, 2048),
        (16, 33),
        (7, 16),
        (1000, 2048),
    ];
    for (k, n) in invalid {
        assert!(validate(k, n).is_err(), "validate({}, {})", k, n);
        assert!(generate_5g_ranking(k, n).is_err(), "generate_5g_ranking({}, {})", k, n);
    }
}

#[test]
fn validator_accepts_valid_parameters() {
    let valid = [(1, 512), (10, 32), (1000, 1024), (3, 256), (10, 64), (0, 32), (1024, 1024)];
    for (k, n) in valid {
        assert!(validate(k, n).is_ok(), "validate({}, {})", k, n);
        let split = generate_5g_ranking(k, n).unwrap();
        assert_eq!(split.info.len(), k as usize);
        assert_eq!(split.frozen.len(), (n - k) as usize);
    }
}

// ============================================================================
// 5G polar construction
// ============================================================================

#[test]
fn polar_split_is_partition() {
    for n in VALID_N {
        for k in [0, 1, n / 4, n / 2, n - 1, n] {
            let split = generate_5g_ranking(k, n).unwrap();
            assert!(split.is_partition_of(n as usize), "k = {}, n = {}", k, n);
            assert!(split.frozen.windows(2).all(|w| w[0] < w[1]));
            assert!(split.info.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn polar_is_deterministic() {
    let a = generate_5g_ranking(300, 512).unwrap();
    let b = generate_5g_ranking(300, 512).unwrap();
    assert_eq!(a, b);
}

#[test]
fn polar_monotone_in_k() {
    let seq = ReliabilitySequence::nr5g();
    for n in [32i64, 128, 1024] {
        let order: Vec<usize> = seq.restrict(n as usize).collect();
        let mut previous = generate_5g_ranking(0, n).unwrap().frozen_mask();
        for k in 1..=n {
            let current = generate_5g_ranking(k, n).unwrap().frozen_mask();
            let changed: Vec<usize> = (0..n as usize)
                .filter(|&i| previous[i] != current[i])
                .collect();
            assert_eq!(changed.len(), 1, "k = {}, n = {}", k, n);
            // Frozen -> info, and the channel moved is the next most reliable one
            assert!(previous[changed[0]] && !current[changed[0]]);
            assert_eq!(changed[0], order[(n - k) as usize]);
            previous = current;
        }
    }
}

#[test]
fn polar_nested_across_blocklengths() {
    // The n-channel ordering is the 2n-channel ordering with channels >= n removed
    let seq = ReliabilitySequence::nr5g();
    for n in [32usize, 64, 128, 256, 512] {
        let small: Vec<usize> = seq.restrict(n).collect();
        let large: Vec<usize> = seq.restrict(2 * n).filter(|&i| i < n).collect();
        assert_eq!(small, large);
    }
}

#[test]
fn polar_reliability_order_matches_sorted_output() {
    let seq = ReliabilitySequence::nr5g();
    let ranked = generate_5g_ranking_with(40, 128, PositionOrder::Reliability, seq).unwrap();
    let sorted = generate_5g_ranking(40, 128).unwrap();

    let mut info = ranked.info.clone();
    info.sort_unstable();
    assert_eq!(info, sorted.info);

    let ranks = seq.ranks();
    assert!(ranked.info.windows(2).all(|w| ranks[w[0]] < ranks[w[1]]));
    let max_frozen = ranked.frozen.iter().map(|&i| ranks[i]).max().unwrap();
    let min_info = ranked.info.iter().map(|&i| ranks[i]).min().unwrap();
    assert!(max_frozen < min_info);
}

#[test]
fn polar_dense_matrices_are_orthogonal() {
    for (k, n) in [(8i64, 32i64), (32, 64), (0, 32), (32, 32)] {
        let split = generate_5g_ranking(k, n).unwrap();
        let dense = dense_polar(&split.frozen, n as usize).unwrap();
        assert_eq!(dense.gm.rows(), k as usize);
        assert_eq!(dense.pcm.rows(), (n - k) as usize);
        assert!(dense.gm.mul_transpose_is_zero(&dense.pcm));
    }
}

// ============================================================================
// Reed-Muller construction
// ============================================================================

#[test]
fn rm_parameters_match_family_definition() {
    // r, m, n, k, d_min
    let table = [
        (0, 0, 1, 1, 1),
        (1, 1, 2, 2, 1),
        (2, 2, 4, 4, 1),
        (3, 3, 8, 8, 1),
        (4, 4, 16, 16, 1),
        (5, 5, 32, 32, 1),
        (0, 1, 2, 1, 2),
        (1, 2, 4, 3, 2),
        (2, 3, 8, 7, 2),
        (3, 4, 16, 15, 2),
        (4, 5, 32, 31, 2),
        (0, 2, 4, 1, 4),
        (1, 3, 8, 4, 4),
        (2, 4, 16, 11, 4),
        (3, 5, 32, 26, 4),
        (0, 3, 8, 1, 8),
        (1, 4, 16, 5, 8),
        (2, 5, 32, 16, 8),
        (0, 4, 16, 1, 16),
        (1, 5, 32, 6, 16),
        (0, 5, 32, 1, 32),
    ];

    for (r, m, n, k, d_min) in table {
        let rm = generate_rm_code(r, m).unwrap();
        assert_eq!(rm.n, n, "RM({}, {})", r, m);
        assert_eq!(rm.k, k, "RM({}, {})", r, m);
        assert_eq!(rm.d_min, d_min, "RM({}, {})", r, m);
        assert_eq!(rm.split.frozen.len(), n - k);
        assert_eq!(rm.split.info.len(), k);
        assert!(rm.split.is_partition_of(n));
    }
}

#[test]
fn rm_info_rows_have_weight_at_least_d_min() {
    for m in 0..=8i64 {
        for r in 0..=m {
            let rm = generate_rm_code(r, m).unwrap();
            let threshold = (m - r) as u32;
            assert!(rm.split.info.iter().all(|&j| j.count_ones() >= threshold));
            assert!(rm.split.frozen.iter().all(|&j| j.count_ones() < threshold));
        }
    }
}

#[test]
fn rm_is_deterministic() {
    assert_eq!(generate_rm_code(3, 7).unwrap(), generate_rm_code(3, 7).unwrap());
}

#[test]
fn rm_codes_are_nested() {
    // RM(r, m) ⊂ RM(r + 1, m)
    for r in 0..6i64 {
        let lower = generate_rm_code(r, 6).unwrap();
        let upper = generate_rm_code(r + 1, 6).unwrap();
        assert!(lower.split.info.iter().all(|i| upper.split.info.contains(i)));
    }
}

#[test]
fn weight_partition_monotone_in_k() {
    let m = 5;
    let mut previous = partition_by_weight(0, m);
    for k in 1..=32 {
        let current = partition_by_weight(k, m);
        assert_eq!(current.info.len(), k);
        assert!(previous.info.iter().all(|i| current.info.contains(i)));
        previous = current;
    }
}

#[test]
fn rm_rejects_invalid_orders() {
    for (r, m) in [(-1, 3), (2, -1), (4, 3), (0, 21)] {
        assert!(generate_rm_code(r, m).is_err(), "RM({}, {})", r, m);
    }
}
