use thiserror::Error;

/// Top-level error type for the Brickprint footprint kernel.
#[derive(Debug, Error)]
pub enum BrickprintError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Algebra(#[from] AlgebraError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("expected at least {needed} points, got {got}")]
    InsufficientPoints { needed: usize, got: usize },

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors signalled by the 2D polygon boolean algebra.
#[derive(Debug, Error)]
pub enum AlgebraError {
    #[error("malformed boundary ring with {0} points; a ring needs at least 3")]
    MalformedRing(usize),
}

/// Convenience type alias for results using [`BrickprintError`].
pub type Result<T> = std::result::Result<T, BrickprintError>;
