//! Error types for maze construction and configuration

#[cfg(not(feature = "std"))]
use crate::compat::*;

use strum::Display;
use thiserror::Error;

/// Which maze dimension an argument error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Dimension {
    Width,
    Height,
}

/// Errors raised by the maze builder and the session
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MazeError {
    #[error("{dimension} out of range. Expected greater than 0, got {value}")]
    InvalidArgument { dimension: Dimension, value: usize },

    #[error("maze of {width}x{height} cells is too large")]
    TooLarge { width: usize, height: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Errors raised while validating or loading a [`crate::MazeConfig`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("minimum {dimension} must be at least 1")]
    ZeroMinimum { dimension: Dimension },

    #[error("{dimension} range {min}..{max} is empty")]
    EmptyRange {
        dimension: Dimension,
        min: usize,
        max: usize,
    },

    #[error("difficulty scale must be finite and non-negative, got {0}")]
    InvalidScale(f32),

    #[error("move interval must be at least 1 tick")]
    ZeroMoveInterval,

    #[error("could not read config '{path}': {reason}")]
    Read { path: String, reason: String },

    #[error("malformed config: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = MazeError::InvalidArgument {
            dimension: Dimension::Width,
            value: 0,
        };
        assert!(err.to_string().starts_with("width out of range"));

        let err = MazeError::InvalidArgument {
            dimension: Dimension::Height,
            value: 0,
        };
        assert!(err.to_string().starts_with("height out of range"));
    }

    #[test]
    fn test_config_error_wraps() {
        let err: MazeError = ConfigError::ZeroMoveInterval.into();
        assert_eq!(err, MazeError::InvalidConfig(ConfigError::ZeroMoveInterval));
        assert!(err.to_string().contains("move interval"));
    }

    #[test]
    fn test_empty_range_display() {
        let err = ConfigError::EmptyRange {
            dimension: Dimension::Height,
            min: 5,
            max: 5,
        };
        assert_eq!(err.to_string(), "height range 5..5 is empty");
    }
}
