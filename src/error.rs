use thiserror::Error;

/// Rejected entity or viewport construction.
///
/// A NaN anywhere in a body poisons every distance comparison it touches
/// (`circle_collision` would silently return false forever), so bad values
/// are stopped at the constructor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntityError {
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    #[error("radius must be finite and non-negative, got {0}")]
    InvalidRadius(f32),

    #[error("viewport must be positive and finite, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}

/// Failure to load `roids.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
