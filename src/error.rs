use thiserror::Error;

/// Errors raised at the entry of a construction or query call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KdTreeError {
    #[error("Malformed rectangle: lower bound {lower} exceeds upper bound {upper} on axis {axis}")]
    MalformedRectangle { axis: usize, lower: f64, upper: f64 },

    #[error("Dimensionality mismatch: expected {expected} coordinates, found {found}")]
    DimensionalityMismatch { expected: usize, found: usize },

    #[error("Points must have at least one coordinate")]
    ZeroDimensional,

    #[error("NaN coordinate on axis {axis}")]
    NanCoordinate { axis: usize },
}

/// Result type for tree construction and queries.
pub type Result<T> = std::result::Result<T, KdTreeError>;
