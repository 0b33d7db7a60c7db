//! Linear system solver (square LU, least squares)

use super::helpers::{check_info, leading_dim, left_divide_name, validate_rows_match};
use crate::backend::{DenseLinearAlgebraBackend, Transpose};
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use tracing::debug;

/// Solve `A X = B` for X
///
/// Square `A` is solved exactly with an LU factorization with partial
/// pivoting. Rectangular `A` gives the least-squares solution when
/// overdetermined and the minimum-norm solution when underdetermined.
///
/// The result is `cols(A) x cols(B)`. It is named `"<A>-/<B>"` when both
/// inputs are named and shows its name if either input does.
///
/// # Errors
///
/// - [`Error::DimensionMismatch`] if `A` and `B` have different row counts
/// - [`Error::SingularMatrix`] if square `A` is singular
/// - [`Error::RankDeficient`] if rectangular `A` does not have full rank
///
/// # Panics
///
/// Panics if the backend reports an illegal argument.
pub fn mldivide<B>(backend: &B, a: &Matrix, b: &Matrix) -> Result<Matrix>
where
    B: DenseLinearAlgebraBackend + ?Sized,
{
    validate_rows_match(a, b)?;

    let name = left_divide_name(a, b);
    let show_name = a.show_name() || b.show_name();
    let (m, n) = a.size();
    let nrhs = b.cols();

    let x = if m == n {
        solve_square(backend, a, b)?
    } else {
        solve_least_squares(backend, a, b)?
    };

    Ok(Matrix::from_parts(n, nrhs, x, name, show_name))
}

fn solve_square<B>(backend: &B, a: &Matrix, b: &Matrix) -> Result<Vec<f64>>
where
    B: DenseLinearAlgebraBackend + ?Sized,
{
    let n = a.rows();
    let nrhs = b.cols();
    debug!(backend = backend.name(), n, nrhs, "solving square system");

    // the backend overwrites both buffers
    let mut a_buf = a.data().to_vec();
    let mut b_buf = b.data().to_vec();

    let info = backend.solve_general(
        n,
        nrhs,
        &mut a_buf,
        leading_dim(n),
        &mut b_buf,
        leading_dim(nrhs),
    );
    if let Some(pivot) = check_info("solve_general", info) {
        debug!(backend = backend.name(), pivot, "square system is singular");
        return Err(Error::SingularMatrix { pivot });
    }

    Ok(b_buf)
}

fn solve_least_squares<B>(backend: &B, a: &Matrix, b: &Matrix) -> Result<Vec<f64>>
where
    B: DenseLinearAlgebraBackend + ?Sized,
{
    let (m, n) = a.size();
    let nrhs = b.cols();
    let kind = if m >= n {
        "overdetermined"
    } else {
        "underdetermined"
    };
    debug!(
        backend = backend.name(),
        m,
        n,
        nrhs,
        kind,
        "solving least-squares system"
    );

    let mut a_buf = a.data().to_vec();

    // The solution has n rows; when n > m the backend needs that much room, so
    // B is zero-padded up to n * nrhs elements.
    let mut b_buf = Vec::with_capacity(m.max(n) * nrhs);
    b_buf.extend_from_slice(b.data());
    b_buf.resize(m.max(n) * nrhs, 0.0);

    let info = backend.solve_least_squares(
        Transpose::No,
        m,
        n,
        nrhs,
        &mut a_buf,
        leading_dim(n),
        &mut b_buf,
        leading_dim(nrhs),
    );
    if let Some(index) = check_info("solve_least_squares", info) {
        debug!(backend = backend.name(), index, "A does not have full rank");
        return Err(Error::RankDeficient { index });
    }

    b_buf.truncate(n * nrhs);
    Ok(b_buf)
}
