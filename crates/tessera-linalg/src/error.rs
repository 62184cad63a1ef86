//! Errors reported by element access and matrix inversion.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T, E = LinalgError> = std::result::Result<T, E>;

/// Failures raised synchronously by the call that caused them.
///
/// A failed access leaves the accessed value unchanged: writes are validated before any element is
/// touched.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LinalgError {
    /// A logical element index was out of range, or resolved to a slot outside the backing block.
    ///
    /// `physical` is [`None`] if `offset + index` does not fit in a `usize`.
    #[error(
        "element index {index} out of range (element count {count}, physical slot {physical:?}, capacity {capacity})"
    )]
    IndexOutOfRange {
        index: usize,
        count: usize,
        physical: Option<usize>,
        capacity: usize,
    },

    /// A row or column index was outside of `0..order`.
    #[error("row {row}, column {column} out of range for a matrix of order {order}")]
    RowColumnOutOfRange {
        row: usize,
        column: usize,
        order: usize,
    },

    /// The matrix determinant is zero, or indistinguishable from zero.
    #[error("matrix is not invertible (determinant {determinant})")]
    NonInvertible { determinant: f64 },
}

impl LinalgError {
    /// Returns `true` for every variant describing an out-of-range access.
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::RowColumnOutOfRange { .. }
        )
    }

    /// Returns `true` if this error was raised by an inversion of a singular matrix.
    pub fn is_non_invertible(&self) -> bool {
        matches!(self, Self::NonInvertible { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = LinalgError::IndexOutOfRange {
            index: 3,
            count: 4,
            physical: None,
            capacity: 200,
        };
        assert!(err.is_index_out_of_range());
        assert!(!err.is_non_invertible());
        assert_eq!(
            err.to_string(),
            "element index 3 out of range (element count 4, physical slot None, capacity 200)"
        );

        let err = LinalgError::RowColumnOutOfRange {
            row: 0,
            column: 2,
            order: 2,
        };
        assert!(err.is_index_out_of_range());
        assert_eq!(
            err.to_string(),
            "row 0, column 2 out of range for a matrix of order 2"
        );

        let err = LinalgError::NonInvertible { determinant: 0.0 };
        assert!(err.is_non_invertible());
        assert_eq!(err.to_string(), "matrix is not invertible (determinant 0)");
    }
}
