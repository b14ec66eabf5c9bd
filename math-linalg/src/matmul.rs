//! Dense matrix multiplication
//!
//! [`dot`] multiplies two dense matrices, dispatching between a
//! divide-and-conquer path for even-dimension square operands and a
//! direct triple-loop path for everything else. The recursive path
//! splits both operands into quadrants and combines seven half-size
//! products (Strassen's identity); sub-problems that are odd or
//! non-square fall through to the direct path, so no padding is ever
//! applied.

use ndarray::{s, Array2, ArrayView2};
use num_traits::Float;

use crate::error::LinalgError;

/// Multiplies `a` (m×k) by `b` (k×p).
///
/// Square operands of equal even dimension go through the recursive
/// quadrant decomposition; all other shapes use the direct algorithm.
/// Both paths produce identical results up to floating-point rounding,
/// and neither mutates its operands.
///
/// # Errors
///
/// [`LinalgError::ShapeMismatch`] if `a.ncols() != b.nrows()`.
pub fn dot<T: Float>(a: &Array2<T>, b: &Array2<T>) -> Result<Array2<T>, LinalgError> {
    dot_views(a.view(), b.view())
}

fn dot_views<T: Float>(
    a: ArrayView2<'_, T>,
    b: ArrayView2<'_, T>,
) -> Result<Array2<T>, LinalgError> {
    if a.ncols() != b.nrows() {
        return Err(LinalgError::ShapeMismatch {
            lhs: a.dim(),
            rhs: b.dim(),
        });
    }

    // Quadrant recursion applies to equal-shape square operands of even,
    // nonzero dimension; a 0x0 operand would partition into itself.
    let n = a.nrows();
    if a.dim() == b.dim() && n == a.ncols() && n != 0 && n % 2 == 0 {
        log::trace!("partitioned multiply of {n}x{n} operands");
        dot_partitioned(a, b)
    } else {
        Ok(dot_general(a, b))
    }
}

/// Direct triple-loop multiply, also the base case of the recursion.
fn dot_general<T: Float>(a: ArrayView2<'_, T>, b: ArrayView2<'_, T>) -> Array2<T> {
    let (m, k) = a.dim();
    let p = b.ncols();

    let mut c = Array2::zeros((m, p));
    for i in 0..m {
        for j in 0..p {
            let mut acc = T::zero();
            for l in 0..k {
                acc = acc + a[[i, l]] * b[[l, j]];
            }
            c[[i, j]] = acc;
        }
    }
    c
}

/// Splits a square even-dimension matrix into its four quadrant views.
fn quadrants<'a, T>(
    m: ArrayView2<'a, T>,
    h: usize,
) -> (
    ArrayView2<'a, T>,
    ArrayView2<'a, T>,
    ArrayView2<'a, T>,
    ArrayView2<'a, T>,
) {
    (
        m.slice_move(s![..h, ..h]),
        m.slice_move(s![..h, h..]),
        m.slice_move(s![h.., ..h]),
        m.slice_move(s![h.., h..]),
    )
}

/// Places four h×h quadrants at their offsets in a fresh 2h×2h matrix.
fn from_quadrants<T: Float>(
    c11: Array2<T>,
    c12: Array2<T>,
    c21: Array2<T>,
    c22: Array2<T>,
) -> Array2<T> {
    let h = c11.nrows();
    let n = h + c21.nrows();

    let mut c = Array2::zeros((n, n));
    c.slice_mut(s![..h, ..h]).assign(&c11);
    c.slice_mut(s![..h, h..]).assign(&c12);
    c.slice_mut(s![h.., ..h]).assign(&c21);
    c.slice_mut(s![h.., h..]).assign(&c22);
    c
}

/// Recursive multiply for square operands of even dimension.
///
/// Each of the seven half-size products re-enters the dispatcher, so
/// even-square sub-problems keep recursing and everything else bottoms
/// out in [`dot_general`]. Recursion depth is bounded by log2(n).
fn dot_partitioned<T: Float>(
    a: ArrayView2<'_, T>,
    b: ArrayView2<'_, T>,
) -> Result<Array2<T>, LinalgError> {
    let h = a.nrows() / 2;
    let (a11, a12, a21, a22) = quadrants(a, h);
    let (b11, b12, b21, b22) = quadrants(b, h);

    let m1 = dot_views((&a11 + &a22).view(), (&b11 + &b22).view())?;
    let m2 = dot_views((&a21 + &a22).view(), b11)?;
    let m3 = dot_views(a11, (&b12 - &b22).view())?;
    let m4 = dot_views(a22, (&b21 - &b11).view())?;
    let m5 = dot_views((&a11 + &a12).view(), b22)?;
    let m6 = dot_views((&a21 - &a11).view(), (&b11 + &b12).view())?;
    let m7 = dot_views((&a12 - &a22).view(), (&b21 + &b22).view())?;

    let c11 = &m1 + &m4 - &m5 + &m7;
    let c12 = &m3 + &m5;
    let c21 = &m2 + &m4;
    let c22 = &m1 - &m2 + &m3 + &m6;

    Ok(from_quadrants(c11, c12, c21, c22))
}
