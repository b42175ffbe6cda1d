// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Input validation for operator builders.
//!
//! All checks run before any entry of a result is written.

use ndarray::Array2;
use num_complex::Complex64;

use crate::error::{Error, Result};

/// Validate a significance threshold.
pub fn validate_epsilon(epsilon: f64) -> Result<()> {
    if epsilon.is_nan() || epsilon < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "epsilon must be nonnegative, got {}",
            epsilon
        )));
    }
    Ok(())
}

/// Validate a matrix size used to build a default block.
pub fn validate_size(size: usize) -> Result<()> {
    if size == 0 {
        return Err(Error::InvalidArgument(
            "matrix size must be positive, got 0".into(),
        ));
    }
    Ok(())
}

/// Validate a caller-supplied block against the shape its key demands.
///
/// `label` names the key in error messages (e.g. `"degree 2"`).
pub fn validate_block(
    label: &str,
    block: &Array2<Complex64>,
    expected: (usize, usize),
) -> Result<()> {
    let actual = block.dim();
    if actual != expected {
        return Err(Error::ShapeMismatch {
            block: label.to_string(),
            expected,
            actual,
        });
    }
    validate_finite(label, block)
}

/// Validate that a block only holds finite numbers.
pub fn validate_finite(label: &str, block: &Array2<Complex64>) -> Result<()> {
    for ((i, j), z) in block.indexed_iter() {
        if !z.re.is_finite() || !z.im.is_finite() {
            return Err(Error::TypeMismatch(format!(
                "{}: entry ({}, {}) is not a finite number",
                label, i, j
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_epsilon() {
        assert!(validate_epsilon(0.0).is_ok());
        assert!(validate_epsilon(1e-8).is_ok());
        assert!(validate_epsilon(-1e-8).is_err());
        assert!(validate_epsilon(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_size() {
        assert!(validate_size(1).is_ok());
        assert!(matches!(validate_size(0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_validate_block_shape() {
        let block = Array2::<Complex64>::zeros((2, 3));
        assert!(validate_block("pair (1, 2)", &block, (2, 3)).is_ok());

        let err = validate_block("degree 2", &block, (2, 2)).unwrap_err();
        match err {
            Error::ShapeMismatch {
                block,
                expected,
                actual,
            } => {
                assert_eq!(block, "degree 2");
                assert_eq!(expected, (2, 2));
                assert_eq!(actual, (2, 3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_block_rejects_infinite() {
        let mut block = Array2::<Complex64>::zeros((2, 2));
        block[[1, 0]] = Complex64::new(0.0, f64::INFINITY);
        let err = validate_block("degree 2", &block, (2, 2)).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch(_)));
        assert!(err.to_string().contains("(1, 0)"));
    }
}
