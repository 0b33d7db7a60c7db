//! Helper functions for the solver and inverter
//!
//! Validation utilities and backend status translation.

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Validate matrix is square, returning its order
pub fn validate_square_matrix(a: &Matrix) -> Result<usize> {
    let (m, n) = a.size();
    if m != n {
        return Err(Error::not_square(m, n));
    }
    Ok(n)
}

/// Validate that `b` has as many rows as `a`
pub fn validate_rows_match(a: &Matrix, b: &Matrix) -> Result<()> {
    if a.rows() != b.rows() {
        return Err(Error::dimension_mismatch(a.rows(), b.rows()));
    }
    Ok(())
}

/// Name of `A -/ B`: `"<A>-/<B>"` when both operands are named
pub fn left_divide_name(a: &Matrix, b: &Matrix) -> Option<String> {
    match (a.name(), b.name()) {
        (Some(na), Some(nb)) => Some(format!("{na}-/{nb}")),
        _ => None,
    }
}

/// Row stride of a row-major buffer with `cols` columns
///
/// LAPACK requires a leading dimension of at least 1 even for empty matrices.
#[inline]
pub fn leading_dim(cols: usize) -> usize {
    cols.max(1)
}

/// Translate a backend status
///
/// Returns `Some(i)` for a positive status `i` and `None` on success.
///
/// # Panics
///
/// Panics on a negative status: the wrapper passed an illegal argument to the
/// backend, which no caller input can cause.
#[track_caller]
pub fn check_info(routine: &'static str, info: i32) -> Option<usize> {
    assert!(
        info >= 0,
        "Illegal value in {routine} argument {}",
        -(info as i64)
    );
    (info > 0).then_some(info as usize)
}
