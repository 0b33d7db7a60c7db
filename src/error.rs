//! Error types for denselin

use thiserror::Error;

/// Result type alias using denselin's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in denselin operations
///
/// A negative status from the backend is not represented here: it means the
/// wrapper handed the backend an invalid argument, which is a bug in this
/// crate, and it panics instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Data buffer length does not match the requested dimensions
    #[error("Shape mismatch: expected {expected} elements, got {got}")]
    ShapeMismatch {
        /// Expected number of elements (rows * cols)
        expected: usize,
        /// Actual buffer length
        got: usize,
    },

    /// Row counts of the coefficient matrix and right-hand side differ
    #[error("Dimension mismatch: A has {lhs_rows} rows but B has {rhs_rows}")]
    DimensionMismatch {
        /// Rows of A
        lhs_rows: usize,
        /// Rows of B
        rhs_rows: usize,
    },

    /// Operation requires a square matrix
    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Row count
        rows: usize,
        /// Column count
        cols: usize,
    },

    /// The backend found an exactly zero pivot
    #[error("Cannot solve singular matrix (zero pivot at position {pivot})")]
    SingularMatrix {
        /// 1-based position of the zero pivot, as reported by the backend
        pivot: usize,
    },

    /// The least-squares driver found that A does not have full rank
    #[error("Matrix A does not have full rank (zero diagonal at position {index})")]
    RankDeficient {
        /// 1-based position of the zero diagonal element of the triangular factor
        index: usize,
    },
}

impl Error {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(lhs_rows: usize, rhs_rows: usize) -> Self {
        Self::DimensionMismatch { lhs_rows, rhs_rows }
    }

    /// Create a not-square error
    pub fn not_square(rows: usize, cols: usize) -> Self {
        Self::NotSquare { rows, cols }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::dimension_mismatch(3, 2).to_string(),
            "Dimension mismatch: A has 3 rows but B has 2"
        );
        assert_eq!(
            Error::not_square(2, 3).to_string(),
            "Matrix must be square, got 2x3"
        );
        assert_eq!(
            Error::SingularMatrix { pivot: 2 }.to_string(),
            "Cannot solve singular matrix (zero pivot at position 2)"
        );
    }
}
