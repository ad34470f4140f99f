//! Error types for mathematical operations.

/// Errors that can occur during mathematical operations.
#[derive(Debug, thiserror::Error)]
pub enum MathError {
    /// Dimension mismatch.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Actual dimension.
        actual: usize,
    },

    /// Non-square coefficient matrix.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },

    /// Singular or nearly singular linear system.
    #[error("singular or nearly singular system at pivot column {column}")]
    SingularSystem {
        /// Column whose pivot fell below tolerance.
        column: usize,
    },

    /// Empty data.
    #[error("empty data provided")]
    EmptyData,
}
