//! Batch construction of code designs
//!
//! A [`DesignRequest`] names one construction; [`run_batch`] evaluates a
//! list of them and returns one [`DesignReport`] per request, in order.
//! A rejected request produces a report carrying the error and does not
//! stop the rest of the batch.
//!
//! Requests and reports are serde types so they can live in the YAML
//! configuration and be written out by the caller.
//!
//! ```yaml
//! - family: polar5g
//!   k: 16
//!   n: 32
//! - family: reed_muller
//!   r: 1
//!   m: 3
//! ```

use serde::{Deserialize, Serialize};

use crate::polar::generate_5g_ranking_with;
use crate::reed_muller::generate_rm_code;
use crate::reliability::ReliabilitySequence;
use crate::types::{CodeDesign, DesignResult, PositionOrder};

/// One construction request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum DesignRequest {
    /// 5G NR polar code with `k` information bits and blocklength `n`.
    Polar5g {
        k: i64,
        n: i64,
        #[serde(default)]
        order: PositionOrder,
    },
    /// Reed-Muller code RM(r, m).
    ReedMuller { r: i64, m: i64 },
}

impl DesignRequest {
    /// Run the construction.
    pub fn build(&self) -> DesignResult<CodeDesign> {
        match *self {
            DesignRequest::Polar5g { k, n, order } => {
                let split =
                    generate_5g_ranking_with(k, n, order, ReliabilitySequence::nr5g())?;
                Ok(CodeDesign::Polar5g {
                    n: n as usize,
                    k: k as usize,
                    split,
                })
            }
            DesignRequest::ReedMuller { r, m } => generate_rm_code(r, m).map(CodeDesign::from),
        }
    }

    /// Human-readable label, e.g. `polar5g(16, 32)`.
    pub fn label(&self) -> String {
        match self {
            DesignRequest::Polar5g { k, n, .. } => format!("polar5g({}, {})", k, n),
            DesignRequest::ReedMuller { r, m } => format!("rm({}, {})", r, m),
        }
    }
}

/// Outcome of one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignReport {
    pub request: DesignRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design: Option<CodeDesign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DesignReport {
    pub fn is_ok(&self) -> bool {
        self.design.is_some()
    }
}

/// Evaluate every request in order.
pub fn run_batch(requests: &[DesignRequest]) -> Vec<DesignReport> {
    let reports: Vec<DesignReport> = requests
        .iter()
        .map(|request| match request.build() {
            Ok(design) => DesignReport {
                request: request.clone(),
                design: Some(design),
                error: None,
            },
            Err(e) => {
                tracing::warn!(request = %request.label(), constraint = e.constraint(), "{}", e);
                DesignReport {
                    request: request.clone(),
                    design: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect();

    let failed = reports.iter().filter(|r| !r.is_ok()).count();
    tracing::info!(total = reports.len(), failed, "batch complete");
    reports
}
