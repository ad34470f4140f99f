//! Error types for run orchestration.

use quantrank_collect::CollectError;
use quantrank_traits::RepositoryError;

/// Errors that can abort an engine run.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Too few instruments survived collection to attempt any regression.
    #[error("insufficient universe: need at least {required} instruments, got {actual}")]
    InsufficientUniverse {
        /// Minimum usable instruments.
        required: usize,
        /// Instruments actually collected.
        actual: usize,
    },

    /// Collection failed at the universe level.
    #[error("collection failed: {0}")]
    Collect(#[from] CollectError),

    /// The new snapshot could not be persisted.
    #[error("snapshot persistence failed: {0}")]
    Repository(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EngineError::InsufficientUniverse { required: 10, actual: 3 };
        assert!(err.to_string().contains("10") && err.to_string().contains("3"));
    }
}
