use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One commit author as reported by the VCS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// One file touched by a commit.
///
/// A numstat dash (binary file) maps to count 0 with `is_binary` set, so
/// churn sums stay correct while the distinction is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    pub filename: String,
    pub lines_added: u32,
    pub lines_deleted: u32,
    #[serde(default)]
    pub is_binary: bool,
}

/// One parsed commit. Field names follow the interchange format consumed
/// downstream: `commit_hash`, nested `author`, `date`, `message`,
/// `file_changes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitRecord {
    #[serde(rename = "commit_hash")]
    pub hash: String,
    pub author: Author,
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub file_changes: Vec<FileChange>,
}

impl FileChange {
    /// Lines added plus lines deleted; 0 for binary files.
    pub fn churn(&self) -> u64 {
        self.lines_added as u64 + self.lines_deleted as u64
    }
}
