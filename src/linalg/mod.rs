//! Dense solver and inverter
//!
//! Both operations validate shapes, copy the caller's matrices into scratch
//! buffers, hand those to a [`DenseLinearAlgebraBackend`] and translate its
//! status. Caller matrices are never mutated.
//!
//! ```
//! use denselin::{DefaultBackend, Matrix, linalg::LinalgClient};
//!
//! let client = LinalgClient::<DefaultBackend>::default();
//! let a = Matrix::from_rows(&[[2.0, 1.0], [1.0, 3.0]])?.with_name("A");
//! let b = Matrix::from_rows(&[[3.0], [5.0]])?.with_name("b");
//!
//! let x = client.mldivide(&a, &b)?;
//! assert_eq!(x.name(), Some("A-/b"));
//! assert!((x.get(0, 0) - 0.8).abs() < 1e-12);
//! # Ok::<(), denselin::error::Error>(())
//! ```

mod helpers;
mod inverse;
mod solve;


pub use inverse::inv;
pub use solve::mldivide;

use crate::backend::DenseLinearAlgebraBackend;
use crate::error::Result;
use crate::matrix::Matrix;

/// Solver and inverter bound to one backend instance
#[derive(Debug, Clone, Copy, Default)]
pub struct LinalgClient<B> {
    backend: B,
}

impl<B: DenseLinearAlgebraBackend> LinalgClient<B> {
    /// Create a client over `backend`
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The backend this client forwards to
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Solve `A X = B`, see [`mldivide`]
    pub fn mldivide(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        mldivide(&self.backend, a, b)
    }

    /// Inverse of `A`, see [`inv`]
    pub fn inv(&self, a: &Matrix) -> Result<Matrix> {
        inv(&self.backend, a)
    }
}
