//! Persistence contract and a JSON-file implementation.
//!
//! Whatever backs the store, computed fields are persisted verbatim inside
//! the report payloads; the store never recomputes or edits them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::ReportError;
use crate::journal::{JournalLogs, LogEntry};
use crate::profile::{ProfileReport, UserInputs};

/// Kinds of narrative report kept alongside the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportKind {
    Briefing,
    Dossier,
}

impl ReportKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Briefing => "briefing",
            Self::Dossier => "dossier",
        }
    }
}

/// A persisted profile with the inputs it was generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProfile {
    pub inputs: UserInputs,
    pub profile: ProfileReport,
    /// Milliseconds since the Unix epoch.
    pub updated_at: i64,
}

/// Storage for profiles, journal logs and reports, keyed by user id.
pub trait ReportStore {
    /// Insert or replace the user's profile.
    fn save_profile(
        &self,
        user_id: &str,
        inputs: &UserInputs,
        profile: &ProfileReport,
    ) -> Result<(), ReportError>;

    /// The user's profile, or `None` for a new user.
    fn load_profile(&self, user_id: &str) -> Result<Option<StoredProfile>, ReportError>;

    fn append_log(&self, user_id: &str, entry: LogEntry) -> Result<(), ReportError>;

    /// All of the user's logs, grouped by type in recording order.
    fn logs(&self, user_id: &str) -> Result<JournalLogs, ReportError>;

    fn save_report(&self, user_id: &str, kind: ReportKind, content: &Value)
    -> Result<(), ReportError>;

    /// The most recently saved report of `kind`.
    fn latest_report(&self, user_id: &str, kind: ReportKind)
    -> Result<Option<Value>, ReportError>;
}

/// User ids become file names, so they are limited to `[A-Za-z0-9_-]`.
pub fn validate_user_id(user_id: &str) -> Result<(), ReportError> {
    let ok = !user_id.is_empty()
        && user_id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
    if ok {
        Ok(())
    } else {
        Err(ReportError::InvalidUserId(user_id.to_string()))
    }
}

/// Store backed by JSON files under a root directory.
///
/// Layout: `profiles/<user>.json`, `logs/<user>.json`,
/// `reports/<user>.<kind>.json`. Each write replaces its file atomically
/// (temp file + rename).
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, dir: &str, user_id: &str, suffix: &str) -> Result<PathBuf, ReportError> {
        validate_user_id(user_id)?;
        Ok(self.root.join(dir).join(format!("{user_id}{suffix}.json")))
    }

    fn read<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ReportError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn write<T: Serialize>(path: &Path, value: &T) -> Result<(), ReportError> {
        let dir = path.parent().unwrap_or(Path::new("."));
        fs::create_dir_all(dir)?;
        let json = serde_json::to_string_pretty(value)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let tmp = dir.join(format!(".{file_name}.tmp"));
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        debug!(path = %path.display(), "wrote store file");
        Ok(())
    }
}

impl ReportStore for JsonFileStore {
    fn save_profile(
        &self,
        user_id: &str,
        inputs: &UserInputs,
        profile: &ProfileReport,
    ) -> Result<(), ReportError> {
        let path = self.path("profiles", user_id, "")?;
        let stored = StoredProfile {
            inputs: inputs.clone(),
            profile: profile.clone(),
            updated_at: profile.timestamp,
        };
        Self::write(&path, &stored)?;
        info!(user_id, "saved profile");
        Ok(())
    }

    fn load_profile(&self, user_id: &str) -> Result<Option<StoredProfile>, ReportError> {
        let path = self.path("profiles", user_id, "")?;
        Self::read(&path)
    }

    fn append_log(&self, user_id: &str, entry: LogEntry) -> Result<(), ReportError> {
        entry.validate()?;
        let path = self.path("logs", user_id, "")?;
        let mut entries: Vec<LogEntry> = Self::read(&path)?.unwrap_or_default();
        let id = entry.id().to_string();
        entries.push(entry);
        Self::write(&path, &entries)?;
        info!(user_id, log_id = %id, total = entries.len(), "appended log");
        Ok(())
    }

    fn logs(&self, user_id: &str) -> Result<JournalLogs, ReportError> {
        let path = self.path("logs", user_id, "")?;
        let entries: Vec<LogEntry> = Self::read(&path)?.unwrap_or_default();
        Ok(JournalLogs::from_entries(entries))
    }

    fn save_report(
        &self,
        user_id: &str,
        kind: ReportKind,
        content: &Value,
    ) -> Result<(), ReportError> {
        let path = self.path("reports", user_id, &format!(".{}", kind.as_str()))?;
        let mut history: Vec<Value> = Self::read(&path)?.unwrap_or_default();
        history.push(content.clone());
        Self::write(&path, &history)?;
        info!(user_id, kind = kind.as_str(), "saved report");
        Ok(())
    }

    fn latest_report(
        &self,
        user_id: &str,
        kind: ReportKind,
    ) -> Result<Option<Value>, ReportError> {
        let path = self.path("reports", user_id, &format!(".{}", kind.as_str()))?;
        let history: Vec<Value> = Self::read(&path)?.unwrap_or_default();
        Ok(history.into_iter().last())
    }
}
