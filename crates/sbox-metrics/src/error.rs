//! Errors surfaced by metric evaluation.

use sbox_core::ValidationError;
use thiserror::Error;

/// Failure of a metric evaluation. Computations are deterministic, so none of
/// these are transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricError {
    /// The input table was rejected before any computation started.
    #[error("invalid S-box: {0}")]
    Validation(#[from] ValidationError),
    /// A metric name did not match any supported metric.
    #[error("unknown metric '{0}' (expected one of NL, SAC, BIC-NL, BIC-SAC, LAP, DAP)")]
    UnknownMetric(String),
    /// The evaluation was cancelled through its [`CancelToken`](crate::CancelToken).
    #[error("evaluation cancelled")]
    Cancelled,
    /// The evaluation ran past its configured deadline.
    #[error("evaluation exceeded its deadline")]
    DeadlineExceeded,
}
