//! Error types for the simulation and its driver.

use thiserror::Error;

/// Errors surfaced by grid construction, random generation and configuration.
#[derive(Error, Debug)]
pub enum LifeError {
    /// Non-positive size, impossible density or a jagged/non-square matrix
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration that parsed but makes no sense
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading the configuration file failed
    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML for `LifeConfig`
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, LifeError>;

impl LifeError {
    /// Creates a new invalid-argument error.
    #[must_use]
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates a new configuration error.
    #[must_use]
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LifeError::invalid_argument("grid size must be positive");
        assert_eq!(err.to_string(), "Invalid argument: grid size must be positive");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: LifeError = io_err.into();
        assert!(matches!(err, LifeError::Io(_)));
    }
}
