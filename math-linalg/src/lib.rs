//! Dense linear-algebra kernels
//!
//! This crate provides two independent kernels over `ndarray` containers,
//! plus the tolerance helpers their callers compare results with:
//!
//! - **Direct solver**: Gaussian elimination with partial pivoting and
//!   back substitution ([`gaussian_elimination`], [`back_substitution`],
//!   [`solve`])
//! - **Matrix multiplication**: recursive quadrant decomposition with a
//!   triple-loop fallback ([`dot`])
//! - **Approximate equality**: scalar and elementwise predicates
//!   ([`close`], [`close_elementwise`], [`close_all`])
//!
//! All operations are synchronous and single-threaded; only
//! [`gaussian_elimination`] mutates its arguments, and [`solve`] wraps it
//! with copies for callers that need their inputs preserved.
//!
//! # Example
//!
//! ```
//! use math_linalg::solve;
//! use ndarray::array;
//!
//! let a = array![[2.0, 1.0], [1.0, 3.0]];
//! let b = array![3.0, 5.0];
//!
//! let x = solve(&a, &b)?;
//! assert!((a.dot(&x) - &b).iter().all(|r: &f64| r.abs() < 1e-10));
//! # Ok::<(), math_linalg::LinalgError>(())
//! ```

pub mod elimination;
pub mod error;
pub mod matmul;
pub mod tolerance;

pub use elimination::{back_substitution, gaussian_elimination, solve};
pub use error::LinalgError;
pub use matmul::dot;
pub use tolerance::{close, close_all, close_elementwise, Tolerance};
