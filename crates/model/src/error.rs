//! Error types for regression training.

use quantrank_math::MathError;

/// Errors that can occur during regression training.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Math error.
    #[error("math error: {0}")]
    Math(#[from] MathError),

    /// Target vector does not match the design matrix.
    #[error("target length {actual} does not match {expected} samples")]
    TargetLength {
        /// Sample count of the design matrix.
        expected: usize,
        /// Length of the target vector.
        actual: usize,
    },

    /// Design matrix has no rows.
    #[error("empty design matrix")]
    EmptyDesign,
}

impl ModelError {
    /// Returns whether this error indicates a rank-deficient system rather
    /// than malformed input.
    #[must_use]
    pub const fn is_singular(&self) -> bool {
        matches!(self, Self::Math(MathError::SingularSystem { .. }))
    }
}
