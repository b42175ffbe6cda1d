// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Default blocks used when the caller supplies none.

use std::f64::consts::PI;

use ndarray::Array2;
use num_complex::Complex64;

use crate::error::Result;
use crate::validation::validate_size;

/// Default local Hamiltonian for a vertex of dimension `size`.
///
/// Zero for `size == 1`, otherwise the hopping operator with `+i` on the
/// superdiagonal and `-i` on the subdiagonal.
pub fn default_local_hamiltonian(size: usize) -> Result<Array2<Complex64>> {
    validate_size(size)?;
    let i = Complex64::new(0.0, 1.0);
    let mut h = Array2::zeros((size, size));
    for k in 0..size - 1 {
        h[[k, k + 1]] = i;
        h[[k + 1, k]] = -i;
    }
    Ok(h)
}

/// Unnormalized discrete Fourier matrix, `F[j, k] = exp(2πi·j·k / size)`.
///
/// Its columns are mutually orthogonal.
pub fn fourier_matrix(size: usize) -> Result<Array2<Complex64>> {
    validate_size(size)?;
    let n = size as f64;
    Ok(Array2::from_shape_fn((size, size), |(j, k)| {
        // Reduce the exponent first so large sizes keep full phase accuracy.
        let m = (j * k) % size;
        Complex64::from_polar(1.0, 2.0 * PI * m as f64 / n)
    }))
}

/// All-ones coupling block of shape `rows × cols`.
pub fn ones_block(rows: usize, cols: usize) -> Result<Array2<Complex64>> {
    validate_size(rows)?;
    validate_size(cols)?;
    Ok(Array2::from_elem((rows, cols), Complex64::new(1.0, 0.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::error::Error;

    #[test]
    fn test_default_local_hamiltonian_size_one_is_zero() {
        let h = default_local_hamiltonian(1).unwrap();
        assert_eq!(h.dim(), (1, 1));
        assert_eq!(h[[0, 0]], Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_default_local_hamiltonian_size_four() {
        let h = default_local_hamiltonian(4).unwrap();
        let i = Complex64::new(0.0, 1.0);
        let mut expected = Array2::zeros((4, 4));
        expected[[1, 0]] = -i;
        expected[[0, 1]] = i;
        expected[[2, 1]] = -i;
        expected[[1, 2]] = i;
        expected[[3, 2]] = -i;
        expected[[2, 3]] = i;
        assert_eq!(h, expected);
    }

    #[test]
    fn test_default_local_hamiltonian_is_hermitian() {
        let h = default_local_hamiltonian(5).unwrap();
        let dag = h.t().mapv(|z| z.conj());
        assert_eq!(h, dag);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            default_local_hamiltonian(0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(fourier_matrix(0).is_err());
        assert!(ones_block(2, 0).is_err());
    }

    #[test]
    fn test_fourier_matrix_size_two() {
        let f = fourier_matrix(2).unwrap();
        assert_relative_eq!(f[[0, 0]].re, 1.0);
        assert_relative_eq!(f[[0, 1]].re, 1.0);
        assert_relative_eq!(f[[1, 0]].re, 1.0);
        assert_relative_eq!(f[[1, 1]].re, -1.0);
        assert_relative_eq!(f[[1, 1]].im, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_fourier_columns_are_orthogonal() {
        let n = 5;
        let f = fourier_matrix(n).unwrap();
        for a in 0..n {
            for b in 0..n {
                let inner: Complex64 = (0..n).map(|r| f[[r, a]].conj() * f[[r, b]]).sum();
                let expected = if a == b { n as f64 } else { 0.0 };
                assert_relative_eq!(inner.re, expected, epsilon = 1e-12);
                assert_relative_eq!(inner.im, 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_ones_block() {
        let b = ones_block(2, 3).unwrap();
        assert_eq!(b.dim(), (2, 3));
        assert!(b.iter().all(|&z| z == Complex64::new(1.0, 0.0)));
    }
}
