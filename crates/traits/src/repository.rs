//! Snapshot persistence trait definitions.

use quantrank_primitives::AnalysisSnapshot;

/// Errors that can occur while persisting or loading snapshots.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Underlying I/O failure.
    #[error("i/o error: {0}")]
    Io(String),

    /// Snapshot could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persistence for analysis snapshots.
///
/// A run writes one dated, immutable history entry plus an overwritten
/// "latest" pointer; the previous "latest" is read before being replaced so
/// run-over-run drift can be computed.
pub trait SnapshotRepository {
    /// Load the current "latest" snapshot; `Ok(None)` when none has been
    /// written yet.
    fn load_latest(&self) -> Result<Option<AnalysisSnapshot>, RepositoryError>;

    /// Persist a snapshot to the dated history entry and the "latest"
    /// pointer.
    fn store(&self, snapshot: &AnalysisSnapshot) -> Result<(), RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RepositoryError::Io("permission denied".to_string());
        assert!(err.to_string().contains("permission denied"));
    }
}
