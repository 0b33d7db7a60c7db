//! Matrix inverse through an LU factorization

use super::helpers::{check_info, leading_dim, validate_square_matrix};
use crate::backend::DenseLinearAlgebraBackend;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use tracing::debug;

/// Compute the inverse of a square matrix
///
/// Factors a copy of `A` with partial pivoting, then inverts it in place from
/// the factors. The result carries neither the name nor the display flag of
/// `A`.
///
/// # Errors
///
/// - [`Error::NotSquare`] if `A` is not square; the backend is not called
/// - [`Error::SingularMatrix`] if either step reports a zero pivot
///
/// # Panics
///
/// Panics if the backend reports an illegal argument.
pub fn inv<B>(backend: &B, a: &Matrix) -> Result<Matrix>
where
    B: DenseLinearAlgebraBackend + ?Sized,
{
    let n = validate_square_matrix(a)?;
    debug!(backend = backend.name(), n, "inverting matrix");

    let lda = leading_dim(n);
    let mut a_buf = a.data().to_vec();
    let mut ipiv = vec![0i32; n];

    let info = backend.lu_factorize(n, n, &mut a_buf, lda, &mut ipiv);
    if let Some(pivot) = check_info("lu_factorize", info) {
        debug!(backend = backend.name(), pivot, "zero pivot in LU factorization");
        return Err(Error::SingularMatrix { pivot });
    }

    let info = backend.lu_invert(n, &mut a_buf, lda, &ipiv);
    if let Some(pivot) = check_info("lu_invert", info) {
        debug!(backend = backend.name(), pivot, "LU factors are singular");
        return Err(Error::SingularMatrix { pivot });
    }

    Ok(Matrix::from_parts(n, n, a_buf, None, false))
}
