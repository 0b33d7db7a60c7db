//! Backend calling a system LAPACK through the `lapack` crate
//!
//! The Fortran routines expect column-major storage, so each call transposes
//! the row-major buffers into column-major scratch space, runs the routine and
//! transposes the results back. The application must link a LAPACK provider
//! (OpenBLAS, MKL, Accelerate, ...).

use super::{
    DenseLinearAlgebraBackend, Transpose, check_least_squares_args, check_lu_factorize_args,
    check_lu_invert_args, check_solve_general_args,
};

/// Backend forwarding to `dgesv`, `dgels`, `dgetrf` and `dgetri`
///
/// Thread safety depends on the linked LAPACK. Reference LAPACK and OpenBLAS
/// built with `USE_LOCKING`/`USE_THREAD` are reentrant; otherwise callers must
/// serialize access.
#[derive(Debug, Clone, Copy, Default)]
pub struct LapackBackend;

impl LapackBackend {
    /// Create a new backend
    pub fn new() -> Self {
        Self
    }
}

/// Copy a row-major `rows x cols` block into a column-major buffer with
/// leading dimension `ld_out >= rows`
fn to_col_major(rows: usize, cols: usize, src: &[f64], ld: usize, ld_out: usize) -> Vec<f64> {
    let mut out = vec![0.0; ld_out * cols.max(1)];
    for i in 0..rows {
        for j in 0..cols {
            out[j * ld_out + i] = src[i * ld + j];
        }
    }
    out
}

/// Inverse of [`to_col_major`]
fn from_col_major(rows: usize, cols: usize, src: &[f64], ld_in: usize, dst: &mut [f64], ld: usize) {
    for i in 0..rows {
        for j in 0..cols {
            dst[i * ld + j] = src[j * ld_in + i];
        }
    }
}

/// Convert a dimension to a Fortran integer
///
/// Fails with the illegal-argument status for method argument `arg` when the
/// value does not fit.
fn to_fortran(v: usize, arg: i32) -> Result<i32, i32> {
    i32::try_from(v).map_err(|_| -arg)
}

/// Optimal workspace size reported by a `lwork = -1` query
fn workspace_len(query: f64) -> usize {
    (query as usize).max(1)
}

// Method argument position of each Fortran argument, in Fortran order. The
// pivot and workspace arguments the backend allocates itself map to the first
// dimension argument.
const DGESV_ARGS: [i32; 7] = [1, 2, 3, 4, 1, 5, 6];
const DGELS_ARGS: [i32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 2, 2];
const DGETRF_ARGS: [i32; 5] = [1, 2, 3, 4, 5];
const DGETRI_ARGS: [i32; 6] = [1, 2, 3, 4, 1, 1];

/// Renumber a negative Fortran `info` to the method's argument positions
fn remap_info(info: i32, args: &[i32]) -> i32 {
    if info >= 0 {
        return info;
    }
    let fortran_pos = info.unsigned_abs() as usize;
    args.get(fortran_pos - 1).map_or(-args[0], |&pos| -pos)
}

fn gesv(
    n: usize,
    nrhs: usize,
    a: &mut [f64],
    lda: usize,
    b: &mut [f64],
    ldb: usize,
) -> Result<i32, i32> {
    let ld = n.max(1);
    let f_n = to_fortran(n, 1)?;
    let f_nrhs = to_fortran(nrhs, 2)?;
    let f_ld = to_fortran(ld, 1)?;

    let mut a_cm = to_col_major(n, n, a, lda, ld);
    let mut b_cm = to_col_major(n, nrhs, b, ldb, ld);
    let mut ipiv = vec![0i32; n];
    let mut info = 0;
    unsafe {
        ::lapack::dgesv(f_n, f_nrhs, &mut a_cm, f_ld, &mut ipiv, &mut b_cm, f_ld, &mut info);
    }

    from_col_major(n, n, &a_cm, ld, a, lda);
    if info == 0 {
        from_col_major(n, nrhs, &b_cm, ld, b, ldb);
    }
    Ok(remap_info(info, &DGESV_ARGS))
}

#[allow(clippy::too_many_arguments)]
fn gels(
    trans: Transpose,
    m: usize,
    n: usize,
    nrhs: usize,
    a: &mut [f64],
    lda: usize,
    b: &mut [f64],
    ldb: usize,
) -> Result<i32, i32> {
    let lda_cm = m.max(1);
    let ldb_cm = m.max(n).max(1);
    let f_m = to_fortran(m, 2)?;
    let f_n = to_fortran(n, 3)?;
    let f_nrhs = to_fortran(nrhs, 4)?;
    let f_lda = to_fortran(lda_cm, 2)?;
    let f_ldb = to_fortran(ldb_cm, 2)?;

    let rhs_rows = match trans {
        Transpose::No => m,
        Transpose::Yes => n,
    };
    let mut a_cm = to_col_major(m, n, a, lda, lda_cm);
    let mut b_cm = to_col_major(rhs_rows, nrhs, b, ldb, ldb_cm);

    let mut info = 0;
    let mut query = [0.0f64];
    unsafe {
        ::lapack::dgels(
            trans.as_lapack_char(),
            f_m,
            f_n,
            f_nrhs,
            &mut a_cm,
            f_lda,
            &mut b_cm,
            f_ldb,
            &mut query,
            -1,
            &mut info,
        );
    }
    if info != 0 {
        return Ok(remap_info(info, &DGELS_ARGS));
    }

    let mut work = vec![0.0f64; workspace_len(query[0])];
    let lwork = to_fortran(work.len(), 2)?;
    unsafe {
        ::lapack::dgels(
            trans.as_lapack_char(),
            f_m,
            f_n,
            f_nrhs,
            &mut a_cm,
            f_lda,
            &mut b_cm,
            f_ldb,
            &mut work,
            lwork,
            &mut info,
        );
    }

    from_col_major(m, n, &a_cm, lda_cm, a, lda);
    if info == 0 {
        from_col_major(m.max(n), nrhs, &b_cm, ldb_cm, b, ldb);
    }
    Ok(remap_info(info, &DGELS_ARGS))
}

fn getrf(m: usize, n: usize, a: &mut [f64], lda: usize, ipiv: &mut [i32]) -> Result<i32, i32> {
    let ld = m.max(1);
    let f_m = to_fortran(m, 1)?;
    let f_n = to_fortran(n, 2)?;
    let f_ld = to_fortran(ld, 1)?;

    let mut a_cm = to_col_major(m, n, a, lda, ld);
    let mut info = 0;
    unsafe {
        ::lapack::dgetrf(f_m, f_n, &mut a_cm, f_ld, &mut ipiv[..m.min(n)], &mut info);
    }
    from_col_major(m, n, &a_cm, ld, a, lda);
    Ok(remap_info(info, &DGETRF_ARGS))
}

fn getri(n: usize, a: &mut [f64], lda: usize, ipiv: &[i32]) -> Result<i32, i32> {
    let ld = n.max(1);
    let f_n = to_fortran(n, 1)?;
    let f_ld = to_fortran(ld, 1)?;

    let mut a_cm = to_col_major(n, n, a, lda, ld);
    let mut info = 0;
    let mut query = [0.0f64];
    unsafe {
        ::lapack::dgetri(f_n, &mut a_cm, f_ld, &ipiv[..n], &mut query, -1, &mut info);
    }
    if info != 0 {
        return Ok(remap_info(info, &DGETRI_ARGS));
    }

    let mut work = vec![0.0f64; workspace_len(query[0])];
    let lwork = to_fortran(work.len(), 1)?;
    unsafe {
        ::lapack::dgetri(f_n, &mut a_cm, f_ld, &ipiv[..n], &mut work, lwork, &mut info);
    }
    if info == 0 {
        from_col_major(n, n, &a_cm, ld, a, lda);
    }
    Ok(remap_info(info, &DGETRI_ARGS))
}

impl DenseLinearAlgebraBackend for LapackBackend {
    fn name(&self) -> &'static str {
        "lapack"
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
        let info = check_solve_general_args(n, nrhs, a.len(), lda, b.len(), ldb);
        if info != 0 || n == 0 {
            return info;
        }
        gesv(n, nrhs, a, lda, b, ldb).unwrap_or_else(|status| status)
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
        let info = check_least_squares_args(m, n, nrhs, a.len(), lda, b.len(), ldb);
        if info != 0 {
            return info;
        }
        gels(trans, m, n, nrhs, a, lda, b, ldb).unwrap_or_else(|status| status)
    }

    fn lu_factorize(
        &self,
        m: usize,
        n: usize,
        a: &mut [f64],
        lda: usize,
        ipiv: &mut [i32],
    ) -> i32 {
        let info = check_lu_factorize_args(m, n, a.len(), lda, ipiv.len());
        if info != 0 || m.min(n) == 0 {
            return info;
        }
        getrf(m, n, a, lda, ipiv).unwrap_or_else(|status| status)
    }

    fn lu_invert(&self, n: usize, a: &mut [f64], lda: usize, ipiv: &[i32]) -> i32 {
        let info = check_lu_invert_args(n, a.len(), lda, ipiv);
        if info != 0 || n == 0 {
            return info;
        }
        getri(n, a, lda, ipiv).unwrap_or_else(|status| status)
    }
}
