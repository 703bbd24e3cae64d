use thiserror::Error;

pub type Result<T> = std::result::Result<T, FieldError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("invalid grid size: {width}x{height}")]
    InvalidGrid { width: usize, height: usize },

    #[error("coulomb constant must be positive and finite, got {0}")]
    InvalidCoulombConstant(f64),

    #[error(
        "invalid normalization: linear_threshold={linear_threshold}, linear_scale={linear_scale}"
    )]
    InvalidNormalization {
        linear_threshold: f64,
        linear_scale: f64,
    },

    #[error("invalid resample method: {0}")]
    InvalidResample(String),
}
