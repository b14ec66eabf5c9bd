//! Error types shared by the solver and multiplication kernels

use thiserror::Error;

/// Errors reported by the dense kernels.
///
/// All variants are detected synchronously at the point of failure and are
/// never retried. [`crate::solve`] propagates whatever the elimination or
/// substitution step produced, unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// A square matrix was required but the input is rectangular.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// A paired vector does not match the matrix dimension.
    #[error("vector length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// Two operands have incompatible shapes (inner dimensions for a
    /// product, or differing shapes in an elementwise comparison).
    #[error("incompatible shapes: {lhs:?} and {rhs:?}")]
    ShapeMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// No usable pivot exists in the given column; the system cannot be
    /// reduced further by Gaussian elimination.
    #[error("matrix is singular: no usable pivot in column {column}")]
    SingularMatrix { column: usize },

    /// A triangular matrix has an exact zero on the diagonal where back
    /// substitution needs to divide.
    #[error("zero pivot on the diagonal at row {row}")]
    ZeroPivot { row: usize },
}
