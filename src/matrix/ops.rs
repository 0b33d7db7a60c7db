//! Element-wise and structural operations on Matrix

use super::Matrix;
use crate::error::{Error, Result};

impl Matrix {
    /// Transposed copy; the name and display flag are not carried over
    pub fn transpose(&self) -> Matrix {
        let (m, n) = self.size();
        let src = self.data();
        let mut data = vec![0.0; m * n];
        for i in 0..m {
            for j in 0..n {
                data[j * m + i] = src[i * n + j];
            }
        }
        Matrix::from_parts(n, m, data, None, false)
    }

    /// Plain matrix product `self * rhs`
    ///
    /// Returns [`Error::DimensionMismatch`] if `self.cols() != rhs.rows()`.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix> {
        let (m, k) = self.size();
        let (k2, n) = rhs.size();
        if k != k2 {
            return Err(Error::dimension_mismatch(k, k2));
        }
        let a = self.data();
        let b = rhs.data();
        let mut out = vec![0.0; m * n];
        for i in 0..m {
            for p in 0..k {
                let aip = a[i * k + p];
                if aip == 0.0 {
                    continue;
                }
                let b_row = &b[p * n..(p + 1) * n];
                let out_row = &mut out[i * n..(i + 1) * n];
                for (o, &bv) in out_row.iter_mut().zip(b_row) {
                    *o += aip * bv;
                }
            }
        }
        Ok(Matrix::from_parts(m, n, out, None, false))
    }

    /// Apply `f` to every element, e.g. `a.map(denselin::sinh)`
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        let data = self.data().iter().map(|&x| f(x)).collect();
        Matrix::from_parts(
            self.rows(),
            self.cols(),
            data,
            self.name().map(str::to_owned),
            self.show_name(),
        )
    }

    /// Solve `self * X = rhs` for X, i.e. `self -/ rhs`
    ///
    /// Method form of [`crate::mldivide`] using the default backend.
    #[cfg(any(feature = "faer", feature = "lapack"))]
    pub fn left_divide(&self, rhs: &Matrix) -> Result<Matrix> {
        crate::mldivide(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose() {
        let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let t = a.transpose();
        assert_eq!(t.size(), (3, 2));
        assert_eq!(t.data(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_matmul() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(&[[5.0], [6.0]]).unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.size(), (2, 1));
        assert_eq!(c.data(), &[17.0, 39.0]);
        assert!(b.matmul(&b).is_err());
    }

    #[test]
    fn test_map_keeps_name() {
        let a = Matrix::from_rows(&[[1.0, -2.0]]).unwrap().with_name("A");
        let b = a.map(f64::abs);
        assert_eq!(b.data(), &[1.0, 2.0]);
        assert_eq!(b.name(), Some("A"));
    }

    #[cfg(any(feature = "faer", feature = "lapack"))]
    #[test]
    fn test_left_divide() {
        let a = Matrix::from_rows(&[[2.0, 0.0], [0.0, 4.0]]).unwrap().with_name("A");
        let b = Matrix::from_rows(&[[1.0], [1.0]]).unwrap().with_name("B");
        let x = a.left_divide(&b).unwrap();
        assert_eq!(x.name(), Some("A-/B"));
        assert_eq!(x.data(), &[0.5, 0.25]);
    }
}
