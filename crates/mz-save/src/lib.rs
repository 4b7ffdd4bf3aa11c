//! mz-save: Progress records for the amazed maze game
//!
//! Mazes themselves are never saved; only how far the player has got.
//! Records carry a header with a magic string and a format version, and
//! older formats are migrated on load.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Current progress file format version
pub const PROGRESS_VERSION: u32 = 1;

/// Save/restore errors
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Progress file not found")]
    NotFound,

    #[error("Invalid progress file header")]
    InvalidHeader,

    #[error("Incompatible progress version: expected at most {expected}, found {found}")]
    IncompatibleVersion { expected: u32, found: u32 },
}

/// How far the player has got across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// Highest level number completed (1-based, 0 = none yet)
    pub best_level: u32,
    /// Total mazes solved over all sessions
    pub mazes_completed: u32,
    /// Seed of the most recent session, to replay it
    pub last_seed: Option<u64>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            best_level: 0,
            mazes_completed: 0,
            last_seed: None,
            updated_at: Utc::now(),
        }
    }
}

impl Progress {
    /// Record a solved maze. `level` is the 1-based level just completed.
    pub fn record_completion(&mut self, level: u32, seed: u64) {
        self.best_level = self.best_level.max(level);
        self.mazes_completed = self.mazes_completed.saturating_add(1);
        self.last_seed = Some(seed);
        self.updated_at = Utc::now();
    }
}

/// Progress file header for versioning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressHeader {
    pub magic: String,
    pub version: u32,
}

impl ProgressHeader {
    const MAGIC: &'static str = "AMZD";

    pub fn new() -> Self {
        Self {
            magic: Self::MAGIC.to_string(),
            version: PROGRESS_VERSION,
        }
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        if self.magic != Self::MAGIC {
            return Err(SaveError::InvalidHeader);
        }
        if self.version > PROGRESS_VERSION {
            return Err(SaveError::IncompatibleVersion {
                expected: PROGRESS_VERSION,
                found: self.version,
            });
        }
        Ok(())
    }
}

impl Default for ProgressHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete progress file structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressFile {
    pub header: ProgressHeader,
    pub progress: Progress,
}

/// Version 0: the untyped state blob the badge firmware used to write
#[derive(Debug, Default, Deserialize)]
struct LegacyProgress {
    #[serde(default)]
    level: u32,
    #[serde(default)]
    completed: u32,
}

impl From<LegacyProgress> for Progress {
    fn from(legacy: LegacyProgress) -> Self {
        Self {
            best_level: legacy.level,
            mazes_completed: legacy.completed,
            ..Progress::default()
        }
    }
}

/// Turn any known progress document into the current [`Progress`].
pub fn migrate(document: Value) -> Result<Progress, SaveError> {
    if document.get("header").is_none() {
        let legacy: LegacyProgress = serde_json::from_value(document)?;
        return Ok(legacy.into());
    }

    let file: ProgressFile = serde_json::from_value(document)?;
    file.header.validate()?;
    Ok(file.progress)
}

/// Save progress to a file
pub fn save_progress(progress: &Progress, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let file = ProgressFile {
        header: ProgressHeader::new(),
        progress: progress.clone(),
    };

    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &file)?;
    Ok(())
}

/// Load progress from a file, migrating older formats
pub fn load_progress(path: impl AsRef<Path>) -> Result<Progress, SaveError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SaveError::NotFound,
        _ => SaveError::Io(e),
    })?;
    let document: Value = serde_json::from_reader(BufReader::new(file))?;
    migrate(document)
}

/// Load progress, starting fresh when there is no file yet
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Progress, SaveError> {
    match load_progress(path) {
        Err(SaveError::NotFound) => Ok(Progress::default()),
        other => other,
    }
}

/// Get the default progress file path
pub fn default_progress_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("amazed");
    std::fs::create_dir_all(&path).ok();
    path.push("progress.json");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("mz-save-{}-{}.json", std::process::id(), name));
        path
    }

    #[test]
    fn test_record_completion_keeps_best() {
        let mut progress = Progress::default();
        progress.record_completion(3, 10);
        progress.record_completion(1, 11);
        assert_eq!(progress.best_level, 3);
        assert_eq!(progress.mazes_completed, 2);
        assert_eq!(progress.last_seed, Some(11));
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("roundtrip");
        let mut progress = Progress::default();
        progress.record_completion(4, 42);

        save_progress(&progress, &path).unwrap();
        let loaded = load_progress(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, progress);
    }

    #[test]
    fn test_missing_file() {
        let path = temp_path("missing");
        assert!(matches!(load_progress(&path), Err(SaveError::NotFound)));
        let fresh = load_or_default(&path).unwrap();
        assert_eq!(fresh.best_level, 0);
        assert_eq!(fresh.last_seed, None);
    }

    #[test]
    fn test_unreadable_path_is_not_missing() {
        // A directory exists but cannot be opened as a progress file
        let path = temp_path("dir");
        std::fs::create_dir_all(&path).unwrap();
        let result = load_progress(&path);
        let fallback = load_or_default(&path);
        std::fs::remove_dir(&path).ok();

        assert!(!matches!(result, Err(SaveError::NotFound)));
        assert!(fallback.is_err());
    }

    #[test]
    fn test_migrates_legacy_blob() {
        let progress = migrate(json!({ "level": 6, "completed": 9, "volume": 3 })).unwrap();
        assert_eq!(progress.best_level, 6);
        assert_eq!(progress.mazes_completed, 9);
        assert_eq!(progress.last_seed, None);

        let empty = migrate(json!({})).unwrap();
        assert_eq!(empty.best_level, 0);
    }

    #[test]
    fn test_rejects_bad_magic() {
        let doc = json!({
            "header": { "magic": "NOPE", "version": 1 },
            "progress": serde_json::to_value(Progress::default()).unwrap(),
        });
        assert!(matches!(migrate(doc), Err(SaveError::InvalidHeader)));
    }

    #[test]
    fn test_rejects_future_version() {
        let doc = json!({
            "header": { "magic": "AMZD", "version": PROGRESS_VERSION + 1 },
            "progress": serde_json::to_value(Progress::default()).unwrap(),
        });
        assert!(matches!(
            migrate(doc),
            Err(SaveError::IncompatibleVersion { found, .. }) if found == PROGRESS_VERSION + 1
        ));
    }

    #[test]
    fn test_legacy_file_on_disk() {
        let path = temp_path("legacy");
        std::fs::write(&path, r#"{ "level": 2 }"#).unwrap();
        let progress = load_progress(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(progress.best_level, 2);
        assert_eq!(progress.mazes_completed, 0);
    }

    #[test]
    fn test_corrupt_file() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "{ not json").unwrap();
        let result = load_progress(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(SaveError::Serialization(_))));
    }
}
