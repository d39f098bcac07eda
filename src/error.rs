use crate::series::{Method, SeriesKind};
use thiserror::Error;

/// Error type for mean calculations.
///
/// Every variant is detected before any per-row work is done,
/// so a failed call never yields a partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("dataset must have at least one row")]
    EmptyDataset,

    #[error("divisor must be nonzero, but {what} is 0")]
    ZeroDivisor { what: &'static str },

    #[error("class width must be nonzero, but is {width}")]
    InvalidClassWidth { width: f64 },

    #[error("{method} method is not supported for {kind} series: {reason}")]
    UnsupportedCombination {
        kind: SeriesKind,
        method: Method,
        reason: &'static str,
    },
}
