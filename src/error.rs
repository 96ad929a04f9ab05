use thiserror::Error;

/// Errors of the validating and config-loading entry points.
///
/// The editing operations themselves are total and never produce one of these.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("point ({x}, {y}) has a non-finite coordinate")]
    NonFinitePoint { x: f64, y: f64 },

    #[error("invalid input event `{0}`")]
    InvalidEvent(String),

    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}
