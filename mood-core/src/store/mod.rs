//! Flat-file storage for the feedback log
//!
//! The log is a CSV file read in full on every load and rewritten in full on
//! every append. Rewrites go through a temporary file in the same directory
//! that is renamed over the log, so a failed write leaves the previous log
//! untouched.

mod format;

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::StoreError;
use crate::record::FeedbackRecord;

pub use format::{HEADER, decode, encode};

/// File name offered when the log is downloaded.
pub const DOWNLOAD_FILE_NAME: &str = "feedback_data.csv";
/// MIME type of the downloaded log.
pub const CSV_MIME: &str = "text/csv";

/// Append-only feedback log backed by a CSV file
#[derive(Debug, Clone)]
pub struct FeedbackStore {
    path: PathBuf,
}

impl FeedbackStore {
    /// Open a store at `path`. The file does not need to exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole log in submission order.
    ///
    /// A missing file is an empty log.
    pub fn load_all(&self) -> Result<Vec<FeedbackRecord>, StoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "feedback log not found, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::unavailable(&self.path, e)),
        };

        decode(&bytes)
    }

    /// Append one record: load the log, push, rewrite the whole file.
    ///
    /// Not safe against concurrent writers on its own; callers that share a
    /// store must serialize appends (see `FeedbackService`).
    pub fn append(&self, record: FeedbackRecord) -> Result<usize, StoreError> {
        let mut records = self.load_all()?;
        records.push(record);
        self.persist(&records)?;
        Ok(records.len())
    }

    /// Replace the log on disk with `records`.
    fn persist(&self, records: &[FeedbackRecord]) -> Result<(), StoreError> {
        let bytes = encode(records)?;
        let dir = self.parent_dir();

        std::fs::create_dir_all(dir).map_err(|e| StoreError::unavailable(dir, e))?;

        let mut tmp =
            NamedTempFile::new_in(dir).map_err(|e| StoreError::unavailable(dir, e))?;
        tmp.write_all(&bytes)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| StoreError::unavailable(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::unavailable(&self.path, e.error))?;

        debug!(
            path = %self.path.display(),
            records = records.len(),
            "feedback log persisted"
        );
        Ok(())
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Analysis, Submission, now_local};
    use tempfile::tempdir;

    fn record(feedback: &str, polarity: f64) -> FeedbackRecord {
        FeedbackRecord::new(
            Submission::new(feedback),
            Analysis::from_polarity(polarity),
            now_local(),
        )
    }

    #[test]
    fn missing_file_is_empty_log() {
        let dir = tempdir().unwrap();
        let store = FeedbackStore::open(dir.path().join("feedback_data.csv"));
        assert!(store.load_all().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn append_creates_file_and_parent_dirs() {
        let dir = tempdir().unwrap();
        let store = FeedbackStore::open(dir.path().join("nested/deeper/feedback_data.csv"));

        let len = store.append(record("Great class", 0.8)).unwrap();
        assert_eq!(len, 1);
        assert!(store.path().exists());

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert!(contents.starts_with("Timestamp,Name,Course,Feedback,Polarity,Sentiment\n"));
    }

    #[test]
    fn appends_keep_submission_order() {
        let dir = tempdir().unwrap();
        let store = FeedbackStore::open(dir.path().join("feedback_data.csv"));

        store.append(record("first", 0.5)).unwrap();
        store.append(record("second", -0.5)).unwrap();
        store.append(record("third", 0.0)).unwrap();

        let feedback: Vec<_> = store
            .load_all()
            .unwrap()
            .into_iter()
            .map(|r| r.feedback)
            .collect();
        assert_eq!(feedback, vec!["first", "second", "third"]);
    }

    #[test]
    fn reopened_store_sees_persisted_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("feedback_data.csv");

        let written = record("Helpful, clear \"notes\"", 0.4);
        FeedbackStore::open(&path).append(written.clone()).unwrap();

        let loaded = FeedbackStore::open(&path).load_all().unwrap();
        assert_eq!(loaded, vec![written]);
    }

    #[test]
    fn malformed_log_is_not_overwritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("feedback_data.csv");
        std::fs::write(&path, "not,a,feedback,log\n").unwrap();

        let store = FeedbackStore::open(&path);
        let err = store.append(record("x", 0.0)).unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "not,a,feedback,log\n"
        );
    }

    #[test]
    fn unreadable_path_is_unavailable() {
        let dir = tempdir().unwrap();
        // A directory where the log file should be
        let path = dir.path().join("feedback_data.csv");
        std::fs::create_dir(&path).unwrap();

        let store = FeedbackStore::open(&path);
        let err = store.load_all().unwrap_err();
        assert!(matches!(err, StoreError::Unavailable { .. }));
    }

    #[test]
    fn failed_rename_leaves_target_and_dir_untouched() {
        let dir = tempdir().unwrap();
        // A non-empty directory cannot be replaced by rename, even as root
        let path = dir.path().join("feedback_data.csv");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep.txt"), "keep").unwrap();

        let store = FeedbackStore::open(&path);
        let err = store.persist(&[record("lost", 0.5)]).unwrap_err();
        assert!(matches!(err, StoreError::Unavailable { .. }));

        assert_eq!(
            std::fs::read_to_string(path.join("keep.txt")).unwrap(),
            "keep"
        );
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1, "temp file must be cleaned up");
    }

    #[cfg(unix)]
    #[test]
    fn failed_rewrite_keeps_previous_log() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let logs = dir.path().join("logs");
        std::fs::create_dir(&logs).unwrap();
        let path = logs.join("feedback_data.csv");
        let store = FeedbackStore::open(&path);
        store.append(record("kept", 0.5)).unwrap();
        let before = std::fs::read(&path).unwrap();

        std::fs::set_permissions(&logs, std::fs::Permissions::from_mode(0o555)).unwrap();
        let enforced = std::fs::File::create(logs.join("writable")).is_err();
        let result = store.append(record("lost", 0.5));
        std::fs::set_permissions(&logs, std::fs::Permissions::from_mode(0o755)).unwrap();

        // Permission bits are not enforced for root
        if !enforced {
            return;
        }
        let err = result.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable { .. }));
        assert_eq!(std::fs::read(&path).unwrap(), before);
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn append_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("feedback_data.csv");
        let store = FeedbackStore::open(&path);
        store.append(record("kept", 0.5)).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1, "only the log itself should remain");
    }

    #[test]
    fn relative_path_uses_current_dir_parent() {
        let store = FeedbackStore::open("feedback_data.csv");
        assert_eq!(store.parent_dir(), Path::new("."));
    }
}
