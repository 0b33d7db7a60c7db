//! # denselin
//!
//! **Dense linear solves and matrix inversion over a LAPACK-equivalent backend.**
//!
//! denselin does not implement any factorization itself. It lays out
//! row-major buffers, hands them to a [`DenseLinearAlgebraBackend`] and turns
//! the backend's LAPACK-style status codes into typed errors.
//!
//! ## Operations
//!
//! - [`mldivide`]: solve `A X = B`. Square `A` gets an exact LU solve,
//!   overdetermined `A` the least-squares solution and underdetermined `A` the
//!   minimum-norm solution.
//! - [`inv`]: inverse of a square matrix through an LU factorization.
//! - [`sinh`], [`asinh`], [`log10`]: platform elementary functions.
//!
//! ## Quick Start
//!
//! ```
//! use denselin::prelude::*;
//!
//! let a = Matrix::from_rows(&[[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]])?.with_name("A");
//! let b = Matrix::from_rows(&[[1.0], [1.0], [1.0]])?.with_name("B");
//!
//! let x = a.left_divide(&b)?;
//! assert_eq!(x.name(), Some("A-/B"));
//! assert!((x.get(0, 0) - 2.0 / 3.0).abs() < 1e-12);
//!
//! let a_inv = inv(&Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]])?)?;
//! assert!((a_inv.get(0, 0) - 0.6).abs() < 1e-12);
//! # Ok::<(), denselin::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `faer` (default): pure-Rust backend built on `faer`
//! - `lapack`: system LAPACK through the `lapack` crate; the application must
//!   link a provider such as OpenBLAS

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod elementary;
pub mod error;
pub mod linalg;
pub mod matrix;

pub use backend::DenseLinearAlgebraBackend;
pub use elementary::{asinh, log10, sinh};
pub use error::{Error, Result};
pub use matrix::Matrix;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::backend::{DenseLinearAlgebraBackend, Transpose};
    pub use crate::elementary::{ElementaryMath, PlatformMath, asinh, log10, sinh};
    pub use crate::error::{Error, Result};
    pub use crate::linalg::LinalgClient;
    pub use crate::matrix::Matrix;

    #[cfg(any(feature = "faer", feature = "lapack"))]
    pub use crate::{DefaultBackend, inv, mldivide};

    #[cfg(feature = "faer")]
    pub use crate::backend::FaerBackend;

    #[cfg(feature = "lapack")]
    pub use crate::backend::LapackBackend;
}

/// Default backend based on enabled features
///
/// - With `faer` feature: `FaerBackend`
/// - With `lapack` feature (no faer): `LapackBackend`
#[cfg(feature = "faer")]
pub type DefaultBackend = backend::FaerBackend;

/// Default backend based on enabled features
#[cfg(all(feature = "lapack", not(feature = "faer")))]
pub type DefaultBackend = backend::LapackBackend;

/// Solve `A X = B` with the [`DefaultBackend`]
///
/// See [`linalg::mldivide`] for the semantics and errors.
#[cfg(any(feature = "faer", feature = "lapack"))]
pub fn mldivide(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    linalg::mldivide(&DefaultBackend::default(), a, b)
}

/// Inverse of `A` with the [`DefaultBackend`]
///
/// See [`linalg::inv`] for the semantics and errors.
#[cfg(any(feature = "faer", feature = "lapack"))]
pub fn inv(a: &Matrix) -> Result<Matrix> {
    linalg::inv(&DefaultBackend::default(), a)
}
