//! Backend built on the `faer` dense decompositions
//!
//! Every driver copies the row-major buffers into `faer::Mat`, lets `faer`
//! factor and solve, and writes the results back in LAPACK layout. Zero pivots
//! and zero diagonals of `R` are reported exactly as the LAPACK drivers report
//! them: as a positive 1-based index, without attempting the solve.

use super::{
    DenseLinearAlgebraBackend, Transpose, check_least_squares_args, check_lu_factorize_args,
    check_lu_invert_args, check_solve_general_args, interchanges_to_order,
    order_to_interchanges,
};
use ::faer::Mat;
use ::faer::prelude::*;
use ::faer::solvers::PartialPivLu;

/// Pure-Rust backend delegating factorization to `faer`
///
/// Reentrant: holds no state and allocates its own workspace per call.
/// [`lu_factorize`](DenseLinearAlgebraBackend::lu_factorize) only supports
/// square matrices; a rectangular request returns the illegal-argument status
/// for `n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaerBackend;

impl FaerBackend {
    /// Create a new backend
    pub fn new() -> Self {
        Self
    }
}

fn read_row_major(rows: usize, cols: usize, buf: &[f64], ld: usize) -> Mat<f64> {
    Mat::from_fn(rows, cols, |i, j| buf[i * ld + j])
}

fn write_row_major(src: &Mat<f64>, buf: &mut [f64], ld: usize) {
    for i in 0..src.nrows() {
        for j in 0..src.ncols() {
            buf[i * ld + j] = src.read(i, j);
        }
    }
}

/// LAPACK-packed LU factors: strictly lower `L` (unit diagonal implied) and
/// upper `U` including its diagonal.
///
/// `faer` keeps the pivots on the diagonal of one of the two factors and puts
/// ones on the other, so the product of both diagonals is the pivot.
fn packed_factors(lu: &PartialPivLu<f64>, n: usize) -> Mat<f64> {
    let l = lu.compute_l();
    let u = lu.compute_u();
    Mat::from_fn(n, n, |i, j| {
        if i > j {
            l.read(i, j)
        } else if i < j {
            u.read(i, j)
        } else {
            l.read(i, i) * u.read(i, i)
        }
    })
}

/// 0-based index of the first exactly zero diagonal element
fn first_zero_diagonal(m: &Mat<f64>) -> Option<usize> {
    let k = m.nrows().min(m.ncols());
    (0..k).find(|&i| m.read(i, i) == 0.0)
}

fn status_at(index: usize) -> i32 {
    (index + 1) as i32
}

impl DenseLinearAlgebraBackend for FaerBackend {
    fn name(&self) -> &'static str {
        "faer"
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

        let lu = read_row_major(n, n, a, lda).partial_piv_lu();
        let factors = packed_factors(&lu, n);
        write_row_major(&factors, a, lda);
        if let Some(k) = first_zero_diagonal(&factors) {
            return status_at(k);
        }

        if nrhs > 0 {
            let rhs = read_row_major(n, nrhs, b, ldb);
            let x = lu.solve(rhs.as_ref());
            write_row_major(&x, b, ldb);
        }
        0
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
        if nrhs == 0 {
            return 0;
        }
        if m.min(n) == 0 {
            // LAPACK zeroes the solution block when A is empty
            for i in 0..m.max(n) {
                b[i * ldb..i * ldb + nrhs].fill(0.0);
            }
            return 0;
        }

        let a_mat = read_row_major(m, n, a, lda);
        let op = match trans {
            Transpose::No => a_mat,
            Transpose::Yes => a_mat.transpose().to_owned(),
        };
        let (rows, cols) = (op.nrows(), op.ncols());
        let rhs = read_row_major(rows, nrhs, b, ldb);

        let x = if rows >= cols {
            // overdetermined: QR of op(A), x minimizes ||op(A) x - b||
            let qr = op.qr();
            let r = qr.compute_thin_r();
            if let Some(k) = first_zero_diagonal(&r) {
                return status_at(k);
            }
            qr.solve_lstsq(rhs.as_ref())
        } else {
            // underdetermined: op(A)ᵀ = Q R, minimum-norm x = Q R⁻ᵀ b
            let qr = op.transpose().to_owned().qr();
            let r = qr.compute_thin_r();
            if let Some(k) = first_zero_diagonal(&r) {
                return status_at(k);
            }
            let y = r.transpose().solve_lower_triangular(rhs.as_ref());
            let q = qr.compute_thin_q();
            &q * &y
        };

        write_row_major(&x, b, ldb);
        0
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
        if info != 0 {
            return info;
        }
        if m != n {
            return -2;
        }
        if n == 0 {
            return 0;
        }

        let lu = read_row_major(n, n, a, lda).partial_piv_lu();
        let factors = packed_factors(&lu, n);
        write_row_major(&factors, a, lda);
        let (order, _) = lu.row_permutation().into_arrays();
        order_to_interchanges(order, &mut ipiv[..n]);

        match first_zero_diagonal(&factors) {
            Some(k) => status_at(k),
            None => 0,
        }
    }

    fn lu_invert(&self, n: usize, a: &mut [f64], lda: usize, ipiv: &[i32]) -> i32 {
        let info = check_lu_invert_args(n, a.len(), lda, ipiv);
        if info != 0 || n == 0 {
            return info;
        }

        let u = Mat::from_fn(n, n, |i, j| if i <= j { a[i * lda + j] } else { 0.0 });
        if let Some(k) = first_zero_diagonal(&u) {
            return status_at(k);
        }
        let l = Mat::from_fn(n, n, |i, j| match i.cmp(&j) {
            std::cmp::Ordering::Greater => a[i * lda + j],
            std::cmp::Ordering::Equal => 1.0,
            std::cmp::Ordering::Less => 0.0,
        });

        // P A = L U  =>  A⁻¹ = U⁻¹ L⁻¹ P
        let order = interchanges_to_order(ipiv, n);
        let p = Mat::from_fn(n, n, |i, j| if j == order[i] { 1.0 } else { 0.0 });
        let y = l.as_ref().solve_unit_lower_triangular(p.as_ref());
        let inv = u.as_ref().solve_upper_triangular(y.as_ref());

        write_row_major(&inv, a, lda);
        0
    }
}
