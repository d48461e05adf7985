use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Full hex id of a commit
pub type CommitId = String;

/// Full hex id of a blob
pub type BlobId = String;

/// A commit with its subject line
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Commit {
    pub commit_id: CommitId,
    pub message: String,
}

impl Commit {
    #[must_use]
    pub fn new(commit_id: impl Into<CommitId>, message: impl Into<String>) -> Self {
        Self {
            commit_id: commit_id.into(),
            message: message.into(),
        }
    }

    /// Abbreviated id for display
    #[must_use]
    pub fn short_id(&self) -> &str {
        self.commit_id.get(..10).unwrap_or(&self.commit_id)
    }
}

impl fmt::Display for Commit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.short_id(), self.message)
    }
}

/// A file version inside the repository
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RepositoryFile {
    /// Path relative to the repository root
    pub path: PathBuf,
    pub blob_id: BlobId,
}

impl RepositoryFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, blob_id: impl Into<BlobId>) -> Self {
        Self {
            path: path.into(),
            blob_id: blob_id.into(),
        }
    }
}

/// Kind of change recorded for one path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeStatus {
    Added,
    Modified,
    Deleted,
    TypeChanged,
    Renamed,
    Copied,
    Unmerged,
    Unknown,
}

impl ChangeStatus {
    /// Parse the status letter printed by `git diff-tree`
    #[must_use]
    pub fn from_letter(letter: char) -> Self {
        match letter {
            'A' => Self::Added,
            'M' => Self::Modified,
            'D' => Self::Deleted,
            'T' => Self::TypeChanged,
            'R' => Self::Renamed,
            'C' => Self::Copied,
            'U' => Self::Unmerged,
            _ => Self::Unknown,
        }
    }
}

/// One changed path of a commit, with the file on either side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDiff {
    pub status: ChangeStatus,
    /// Absent for added files
    pub before: Option<RepositoryFile>,
    /// Absent for deleted files
    pub after: Option<RepositoryFile>,
}
