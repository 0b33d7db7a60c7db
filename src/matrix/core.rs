//! Core Matrix type

use crate::error::{Error, Result};
use std::fmt;

/// Dense matrix of `f64` stored row-major
///
/// Invariant: `data.len() == rows * cols`. Every constructor enforces it, and
/// no operation in this crate mutates a `Matrix` it was handed by reference.
#[derive(Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
    name: Option<String>,
    show_name: bool,
}

impl Matrix {
    /// Create a matrix from a row-major buffer
    ///
    /// Returns [`Error::ShapeMismatch`] if `data.len() != rows * cols`, or if
    /// `rows * cols` overflows `usize` (reported with `expected: usize::MAX`).
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        let expected = rows.checked_mul(cols).ok_or(Error::ShapeMismatch {
            expected: usize::MAX,
            got: data.len(),
        })?;
        if data.len() != expected {
            return Err(Error::ShapeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            data,
            name: None,
            show_name: false,
        })
    }

    /// Create a matrix from a slice of equally sized rows
    ///
    /// ```
    /// # use denselin::Matrix;
    /// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(a.size(), (2, 2));
    /// assert_eq!(a.get(1, 0), 3.0);
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::ShapeMismatch {
                    expected: cols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::new(rows.len(), cols, data)
    }

    /// Matrix filled with zeros
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let Some(len) = rows.checked_mul(cols) else {
            panic!("{rows}x{cols} matrix size overflows usize");
        };
        Self {
            rows,
            cols,
            data: vec![0.0; len],
            name: None,
            show_name: false,
        }
    }

    /// `n x n` identity matrix
    ///
    /// # Panics
    ///
    /// Panics if `n * n` overflows `usize`.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Attach a display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set whether `Display` prints the name
    pub fn with_show_name(mut self, show_name: bool) -> Self {
        self.show_name = show_name;
        self
    }

    pub(crate) fn from_parts(
        rows: usize,
        cols: usize,
        data: Vec<f64>,
        name: Option<String>,
        show_name: bool,
    ) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self {
            rows,
            cols,
            data,
            name,
            show_name,
        }
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the matrix holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True if rows == cols
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Row-major data
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Consume the matrix, returning its row-major data
    pub fn into_data(self) -> Vec<f64> {
        self.data
    }

    /// Element at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col]
    }

    /// Display name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether `Display` prints the name
    pub fn show_name(&self) -> bool {
        self.show_name
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("size", &self.size())
            .field("name", &self.name)
            .field("data", &self.data)
            .finish()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (true, Some(name)) = (self.show_name, self.name.as_deref()) {
            writeln!(f, "{name} =")?;
        }
        for r in 0..self.rows {
            let row = &self.data[r * self.cols..(r + 1) * self.cols];
            for (c, v) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{v:>10.4}")?;
            }
            if r + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_length() {
        assert!(Matrix::new(2, 2, vec![1.0; 4]).is_ok());
        assert_eq!(
            Matrix::new(2, 3, vec![1.0; 4]).unwrap_err(),
            Error::ShapeMismatch {
                expected: 6,
                got: 4
            }
        );
    }

    #[test]
    fn test_new_rejects_overflowing_size() {
        assert_eq!(
            Matrix::new(usize::MAX, 2, Vec::new()).unwrap_err(),
            Error::ShapeMismatch {
                expected: usize::MAX,
                got: 0
            }
        );
    }

    #[test]
    #[should_panic(expected = "matrix size overflows usize")]
    fn test_zeros_overflowing_size_panics() {
        let _ = Matrix::zeros(usize::MAX, 2);
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
    }

    #[test]
    fn test_identity() {
        let i = Matrix::identity(3);
        assert_eq!(i.data(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_display_name() {
        let a = Matrix::from_rows(&[[1.0, 2.0]])
            .unwrap()
            .with_name("A")
            .with_show_name(true);
        assert!(a.to_string().starts_with("A =\n"));

        let hidden = a.clone().with_show_name(false);
        assert!(!hidden.to_string().contains('A'));
    }
}
