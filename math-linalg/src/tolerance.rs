//! Approximate-equality predicates
//!
//! Scalar and elementwise comparisons with the usual two-part tolerance:
//! `|a - b| <= atol + rtol * |b|`. The second operand is the reference,
//! so the predicate is not symmetric in its arguments.

use ndarray::{Array2, Zip};
use num_traits::Float;

use crate::error::LinalgError;

/// Relative and absolute tolerances for approximate comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<T> {
    pub rtol: T,
    pub atol: T,
}

impl<T: Float> Tolerance<T> {
    pub fn new(rtol: T, atol: T) -> Self {
        Self { rtol, atol }
    }
}

impl<T: Float> Default for Tolerance<T> {
    /// rtol = 1e-5, atol = 1e-8.
    fn default() -> Self {
        Self {
            rtol: T::from(1e-5).unwrap(),
            atol: T::from(1e-8).unwrap(),
        }
    }
}

/// Scalar predicate `|a - b| <= atol + rtol * |b|`, with `b` as the
/// reference value.
pub fn close<T: Float>(a: T, b: T, tol: &Tolerance<T>) -> bool {
    (a - b).abs() <= tol.atol + tol.rtol * b.abs()
}

/// Applies [`close`] per element, returning the boolean result matrix.
///
/// # Errors
///
/// [`LinalgError::ShapeMismatch`] if the operands differ in shape.
pub fn close_elementwise<T: Float>(
    a: &Array2<T>,
    b: &Array2<T>,
    tol: &Tolerance<T>,
) -> Result<Array2<bool>, LinalgError> {
    if a.dim() != b.dim() {
        return Err(LinalgError::ShapeMismatch {
            lhs: a.dim(),
            rhs: b.dim(),
        });
    }

    Ok(Zip::from(a).and(b).map_collect(|&x, &y| close(x, y, tol)))
}

/// True when every element of `a` is [`close`] to its counterpart in `b`.
///
/// # Errors
///
/// [`LinalgError::ShapeMismatch`] if the operands differ in shape.
pub fn close_all<T: Float>(
    a: &Array2<T>,
    b: &Array2<T>,
    tol: &Tolerance<T>,
) -> Result<bool, LinalgError> {
    if a.dim() != b.dim() {
        return Err(LinalgError::ShapeMismatch {
            lhs: a.dim(),
            rhs: b.dim(),
        });
    }

    Ok(a.iter().zip(b.iter()).all(|(&x, &y)| close(x, y, tol)))
}
