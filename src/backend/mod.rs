//! Dense linear-algebra backend contract
//!
//! The solver and inverter never factor anything themselves. They lay out
//! row-major scratch buffers and hand them to a [`DenseLinearAlgebraBackend`],
//! which mirrors the four LAPACK drivers the crate needs:
//!
//! | Method                | LAPACK   |
//! |-----------------------|----------|
//! | `solve_general`       | `dgesv`  |
//! | `solve_least_squares` | `dgels`  |
//! | `lu_factorize`        | `dgetrf` |
//! | `lu_invert`           | `dgetri` |
//!
//! # Conventions
//!
//! - Buffers are row-major; `lda`/`ldb` are the row strides, i.e. the number of
//!   columns of the stored matrix.
//! - Methods return a LAPACK `info` status:
//!   - `0`: success
//!   - `-i`: the `i`-th argument of the method (1-based, in declaration order
//!     after `&self`) is invalid. Scratch space a backend allocates for itself
//!     (pivots, workspace) is not a method argument; a rejection of it is
//!     reported against the first dimension argument.
//!   - `i > 0`: the triangular factor has an exactly zero diagonal element at
//!     1-based position `i`
//! - `ipiv` holds 1-based row interchanges: row `k` was swapped with row
//!   `ipiv[k]`, applied in order `k = 0, 1, ...`.
//!
//! # Thread safety
//!
//! Backends are `Send + Sync` and the crate never shares buffers between
//! calls. [`FaerBackend`] is reentrant. Whether [`LapackBackend`] is depends
//! on the LAPACK library the application links; if it is not reentrant,
//! callers must serialize access themselves.

#[cfg(feature = "faer")]
mod faer;
#[cfg(feature = "lapack")]
mod lapack;

#[cfg(feature = "faer")]
pub use self::faer::FaerBackend;
#[cfg(feature = "lapack")]
pub use self::lapack::LapackBackend;

/// Whether the least-squares driver solves with `A` or `Aᵀ`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transpose {
    /// Solve `A X = B`
    #[default]
    No,
    /// Solve `Aᵀ X = B`
    Yes,
}

impl Transpose {
    /// LAPACK `trans` character
    pub fn as_lapack_char(self) -> u8 {
        match self {
            Transpose::No => b'N',
            Transpose::Yes => b'T',
        }
    }
}

/// Capabilities the solver and inverter require from a dense backend
///
/// Implementations must overwrite only the buffers they are handed and must
/// treat zero-sized problems as successful no-ops.
pub trait DenseLinearAlgebraBackend: Send + Sync {
    /// Human-readable backend name, used in logs
    fn name(&self) -> &'static str;

    /// Solve the square system `A X = B` with partial pivoting
    ///
    /// `a` is `n x n` with row stride `lda`; on return it holds the LU factors.
    /// `b` is `n x nrhs` with row stride `ldb`; on success it holds `X`.
    fn solve_general(
        &self,
        n: usize,
        nrhs: usize,
        a: &mut [f64],
        lda: usize,
        b: &mut [f64],
        ldb: usize,
    ) -> i32;

    /// Solve `op(A) X = B` in the least-squares (or minimum-norm) sense
    ///
    /// `a` is `m x n` with row stride `lda`. `b` must hold `max(m, n)` rows of
    /// stride `ldb`; on entry its leading rows hold `B`, on success its leading
    /// `n` (or `m` when transposed) rows hold `X`. A positive status means `A`
    /// does not have full rank.
    #[allow(clippy::too_many_arguments)]
    fn solve_least_squares(
        &self,
        trans: Transpose,
        m: usize,
        n: usize,
        nrhs: usize,
        a: &mut [f64],
        lda: usize,
        b: &mut [f64],
        ldb: usize,
    ) -> i32;

    /// LU factorization with partial pivoting, `P A = L U`, in place
    ///
    /// On return `a` holds `L` (unit diagonal, strictly lower part) and `U`,
    /// and `ipiv[..min(m, n)]` the row interchanges.
    fn lu_factorize(
        &self,
        m: usize,
        n: usize,
        a: &mut [f64],
        lda: usize,
        ipiv: &mut [i32],
    ) -> i32;

    /// Invert a matrix in place from the output of [`lu_factorize`](Self::lu_factorize)
    fn lu_invert(&self, n: usize, a: &mut [f64], lda: usize, ipiv: &[i32]) -> i32;
}

impl<B: DenseLinearAlgebraBackend + ?Sized> DenseLinearAlgebraBackend for &B {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve_general(
        &self,
        n: usize,
        nrhs: usize,
        a: &mut [f64],
        lda: usize,
        b: &mut [f64],
        ldb: usize,
    ) -> i32 {
        (**self).solve_general(n, nrhs, a, lda, b, ldb)
    }

    fn solve_least_squares(
        &self,
        trans: Transpose,
        m: usize,
        n: usize,
        nrhs: usize,
        a: &mut [f64],
        lda: usize,
        b: &mut [f64],
        ldb: usize,
    ) -> i32 {
        (**self).solve_least_squares(trans, m, n, nrhs, a, lda, b, ldb)
    }

    fn lu_factorize(
        &self,
        m: usize,
        n: usize,
        a: &mut [f64],
        lda: usize,
        ipiv: &mut [i32],
    ) -> i32 {
        (**self).lu_factorize(m, n, a, lda, ipiv)
    }

    fn lu_invert(&self, n: usize, a: &mut [f64], lda: usize, ipiv: &[i32]) -> i32 {
        (**self).lu_invert(n, a, lda, ipiv)
    }
}

// ============================================================================
// Argument checks shared by the bundled backends
// ============================================================================

/// Minimum length of a row-major `rows x cols` buffer with row stride `ld`
#[inline]
fn required_len(rows: usize, cols: usize, ld: usize) -> usize {
    if rows == 0 || cols == 0 {
        0
    } else {
        (rows - 1) * ld + cols
    }
}

/// Status for invalid `solve_general` arguments, 0 if they are valid
#[cfg_attr(not(any(feature = "faer", feature = "lapack")), allow(dead_code))]
pub(crate) fn check_solve_general_args(
    n: usize,
    nrhs: usize,
    a_len: usize,
    lda: usize,
    b_len: usize,
    ldb: usize,
) -> i32 {
    if lda < n.max(1) {
        -4
    } else if a_len < required_len(n, n, lda) {
        -3
    } else if ldb < nrhs.max(1) {
        -6
    } else if b_len < required_len(n, nrhs, ldb) {
        -5
    } else {
        0
    }
}

/// Status for invalid `solve_least_squares` arguments, 0 if they are valid
#[cfg_attr(not(any(feature = "faer", feature = "lapack")), allow(dead_code))]
pub(crate) fn check_least_squares_args(
    m: usize,
    n: usize,
    nrhs: usize,
    a_len: usize,
    lda: usize,
    b_len: usize,
    ldb: usize,
) -> i32 {
    if lda < n.max(1) {
        -6
    } else if a_len < required_len(m, n, lda) {
        -5
    } else if ldb < nrhs.max(1) {
        -8
    } else if b_len < required_len(m.max(n), nrhs, ldb) {
        -7
    } else {
        0
    }
}

/// Status for invalid `lu_factorize` arguments, 0 if they are valid
#[cfg_attr(not(any(feature = "faer", feature = "lapack")), allow(dead_code))]
pub(crate) fn check_lu_factorize_args(
    m: usize,
    n: usize,
    a_len: usize,
    lda: usize,
    ipiv_len: usize,
) -> i32 {
    if lda < n.max(1) {
        -4
    } else if a_len < required_len(m, n, lda) {
        -3
    } else if ipiv_len < m.min(n) {
        -5
    } else {
        0
    }
}

/// Status for invalid `lu_invert` arguments, 0 if they are valid
#[cfg_attr(not(any(feature = "faer", feature = "lapack")), allow(dead_code))]
pub(crate) fn check_lu_invert_args(n: usize, a_len: usize, lda: usize, ipiv: &[i32]) -> i32 {
    if lda < n.max(1) {
        -3
    } else if a_len < required_len(n, n, lda) {
        -2
    } else if ipiv.len() < n || ipiv[..n].iter().any(|&p| p < 1 || p as usize > n) {
        -4
    } else {
        0
    }
}

/// Row order produced by applying the interchanges in `ipiv` to `0..n`
///
/// `order[k]` is the original row that ends up at position `k`, so that
/// `(P A)[k, :] == A[order[k], :]`.
#[cfg_attr(not(feature = "faer"), allow(dead_code))]
pub(crate) fn interchanges_to_order(ipiv: &[i32], n: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    for (k, &p) in ipiv.iter().take(n).enumerate() {
        order.swap(k, p as usize - 1);
    }
    order
}

/// Inverse of [`interchanges_to_order`]: writes the interchanges that bring
/// rows into `order` into `ipiv`
#[cfg_attr(not(feature = "faer"), allow(dead_code))]
pub(crate) fn order_to_interchanges(order: &[usize], ipiv: &mut [i32]) {
    let n = order.len();
    // current[k]: original row at position k; position[r]: where row r sits
    let mut current: Vec<usize> = (0..n).collect();
    let mut position: Vec<usize> = (0..n).collect();
    for k in 0..n {
        let j = position[order[k]];
        ipiv[k] = (j + 1) as i32;
        let (rk, rj) = (current[k], current[j]);
        current.swap(k, j);
        position[rk] = j;
        position[rj] = k;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_char() {
        assert_eq!(Transpose::No.as_lapack_char(), b'N');
        assert_eq!(Transpose::Yes.as_lapack_char(), b'T');
    }

    #[test]
    fn test_check_solve_general_args() {
        assert_eq!(check_solve_general_args(2, 1, 4, 2, 2, 1), 0);
        assert_eq!(check_solve_general_args(2, 1, 4, 1, 2, 1), -4);
        assert_eq!(check_solve_general_args(2, 1, 3, 2, 2, 1), -3);
        assert_eq!(check_solve_general_args(2, 2, 4, 2, 4, 1), -6);
        assert_eq!(check_solve_general_args(2, 1, 4, 2, 1, 1), -5);
        // empty system and empty right-hand side
        assert_eq!(check_solve_general_args(0, 0, 0, 1, 0, 1), 0);
        assert_eq!(check_solve_general_args(2, 0, 4, 2, 0, 1), 0);
    }

    #[test]
    fn test_check_least_squares_args() {
        // underdetermined: b must have n rows
        assert_eq!(check_least_squares_args(1, 3, 1, 3, 3, 3, 1), 0);
        assert_eq!(check_least_squares_args(1, 3, 1, 3, 3, 1, 1), -7);
        assert_eq!(check_least_squares_args(3, 2, 1, 6, 1, 3, 1), -6);
    }

    #[test]
    fn test_check_lu_invert_args() {
        assert_eq!(check_lu_invert_args(2, 4, 2, &[2, 2]), 0);
        assert_eq!(check_lu_invert_args(2, 4, 2, &[0, 2]), -4);
        assert_eq!(check_lu_invert_args(2, 4, 2, &[3, 2]), -4);
        assert_eq!(check_lu_invert_args(2, 4, 2, &[1]), -4);
    }

    #[test]
    fn test_interchanges_roundtrip() {
        let order = vec![2, 0, 3, 1];
        let mut ipiv = vec![0; 4];
        order_to_interchanges(&order, &mut ipiv);
        assert!(ipiv.iter().enumerate().all(|(k, &p)| p as usize > k));
        assert_eq!(interchanges_to_order(&ipiv, 4), order);
    }

    #[test]
    fn test_three_row_cycle_interchanges() {
        // row 2 to the top, then row 0, then row 1
        let mut ipiv = vec![0; 3];
        order_to_interchanges(&[2, 0, 1], &mut ipiv);
        assert_eq!(ipiv, vec![3, 3, 3]);

        // the inverse cycle needs different interchanges
        order_to_interchanges(&[1, 2, 0], &mut ipiv);
        assert_eq!(ipiv, vec![2, 3, 3]);
        assert_eq!(interchanges_to_order(&ipiv, 3), vec![1, 2, 0]);
    }

    #[test]
    fn test_identity_order_has_no_swaps() {
        let mut ipiv = vec![0; 3];
        order_to_interchanges(&[0, 1, 2], &mut ipiv);
        assert_eq!(ipiv, vec![1, 2, 3]);
    }
}
