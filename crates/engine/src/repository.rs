//! Filesystem snapshot repository.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use quantrank_primitives::{AnalysisSnapshot, Date};
use quantrank_traits::{RepositoryError, SnapshotRepository};
use tracing::info;

/// Name of the overwritten "latest" pointer file.
const LATEST_FILE: &str = "factor-analysis-latest.json";

/// Snapshot repository backed by a directory of JSON files.
///
/// Every run produces one immutable dated file plus the "latest" pointer.
/// The dated file is written before the pointer is replaced, so an
/// interrupted run never clobbers the previous "latest".
#[derive(Debug, Clone)]
pub struct FsSnapshotRepository {
    dir: PathBuf,
}

impl FsSnapshotRepository {
    /// Create a repository rooted at `dir`; the directory is created on
    /// first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the "latest" pointer file.
    #[must_use]
    pub fn latest_path(&self) -> PathBuf {
        self.dir.join(LATEST_FILE)
    }

    /// Path of the dated history file for a calendar day.
    #[must_use]
    pub fn dated_path(&self, date: Date) -> PathBuf {
        self.dir.join(format!("factor-analysis-{date}.json"))
    }

    fn write_file(path: &Path, json: &str) -> Result<(), RepositoryError> {
        fs::write(path, json).map_err(|err| RepositoryError::Io(err.to_string()))
    }
}

impl SnapshotRepository for FsSnapshotRepository {
    fn load_latest(&self) -> Result<Option<AnalysisSnapshot>, RepositoryError> {
        let payload = match fs::read_to_string(self.latest_path()) {
            Ok(payload) => payload,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(RepositoryError::Io(err.to_string())),
        };

        let snapshot = serde_json::from_str(&payload)
            .map_err(|err| RepositoryError::Serialization(err.to_string()))?;
        Ok(Some(snapshot))
    }

    fn store(&self, snapshot: &AnalysisSnapshot) -> Result<(), RepositoryError> {
        fs::create_dir_all(&self.dir).map_err(|err| RepositoryError::Io(err.to_string()))?;

        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|err| RepositoryError::Serialization(err.to_string()))?;

        let dated = self.dated_path(snapshot.generated_date);
        Self::write_file(&dated, &json)?;
        Self::write_file(&self.latest_path(), &json)?;

        info!(path = %dated.display(), "analysis snapshot written");
        Ok(())
    }
}
