//! Error types for instrument collection.

use quantrank_traits::StoreError;

/// Errors that can occur during instrument collection.
///
/// Per-instrument failures are logged and excluded rather than surfaced
/// here; only universe-level failures abort a collection pass.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    /// The active-instrument listing could not be read.
    #[error("failed to list active instruments: {0}")]
    Universe(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CollectError::Universe(StoreError::Backend("down".to_string()));
        assert!(err.to_string().contains("down"));
    }
}
