// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for operator construction.

use std::fmt;

/// Result type alias for operator construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Operator construction errors.
#[derive(Debug)]
pub enum Error {
    /// Malformed argument: non-positive size, negative epsilon, non-square
    /// adjacency, invalid vertex or vertex set
    InvalidArgument(String),
    /// A required degree, vertex or vertex-pair key is absent from a block map
    MissingKey(String),
    /// A supplied block does not have the shape its key demands
    ShapeMismatch {
        block: String,
        expected: (usize, usize),
        actual: (usize, usize),
    },
    /// A supplied matrix holds non-numeric (NaN or infinite) entries
    TypeMismatch(String),
    /// Configuration error
    Config(String),
    /// IO error
    Io(std::io::Error),
    /// Serialization error
    Serialization(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::MissingKey(key) => write!(f, "Missing key: {}", key),
            Error::ShapeMismatch {
                block,
                expected,
                actual,
            } => write!(
                f,
                "Shape mismatch for {}: expected {} × {}, got {} × {}",
                block, expected.0, expected.1, actual.0, actual.1
            ),
            Error::TypeMismatch(msg) => write!(f, "Type mismatch: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn test_error_display_invalid_argument() {
        let e = Error::InvalidArgument("epsilon must be nonnegative".into());
        assert_eq!(
            e.to_string(),
            "Invalid argument: epsilon must be nonnegative"
        );
    }

    #[test]
    fn test_error_display_missing_key() {
        let e = Error::MissingKey("degree 3".into());
        assert_eq!(e.to_string(), "Missing key: degree 3");
    }

    #[test]
    fn test_error_display_shape_mismatch() {
        let e = Error::ShapeMismatch {
            block: "vertex [2, 3]".into(),
            expected: (2, 2),
            actual: (3, 3),
        };
        assert_eq!(
            e.to_string(),
            "Shape mismatch for vertex [2, 3]: expected 2 × 2, got 3 × 3"
        );
    }

    #[test]
    fn test_error_display_type_mismatch() {
        let e = Error::TypeMismatch("NaN at (0, 1)".into());
        assert_eq!(e.to_string(), "Type mismatch: NaN at (0, 1)");
    }

    #[test]
    fn test_error_display_config() {
        let e = Error::Config("bad epsilon".into());
        assert_eq!(e.to_string(), "Configuration error: bad epsilon");
    }

    #[test]
    fn test_error_source() {
        let e = Error::Io(std::io::Error::other("disk"));
        assert!(e.source().is_some());
        assert!(Error::MissingKey("x".into()).source().is_none());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e: Error = io_err.into();
        assert!(matches!(e, Error::Io(_)));
    }

    #[test]
    fn test_from_serde_yaml_error() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("{{{{").unwrap_err();
        let e: Error = yaml_err.into();
        assert!(matches!(e, Error::Serialization(_)));
    }
}
