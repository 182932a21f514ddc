use thiserror::Error;

/// Errors raised by the node, basis and differentiation routines.
///
/// Every routine validates its arguments up front and returns one of these
/// before touching any array, so a failed call never leaves partial output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpectralError {
    #[error("at least 2 nodes are required, got {n_nodes}")]
    InvalidNodeCount { n_nodes: usize },

    #[error("derivative order must be at least 1, got {order}")]
    InvalidDerivativeOrder { order: i32 },

    #[error("dimension mismatch in {context}: expected {expected}, found {found}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("at least 1 sample point is required")]
    InvalidSampleCount,

    #[error("invalid interval [{lower}, {upper}]: bounds must be finite with lower < upper")]
    InvalidInterval { lower: f64, upper: f64 },
}

pub type SpectralResult<T> = Result<T, SpectralError>;
