use crate::diff::parse_raw_diff;
use crate::error::{RepositoryError, Result};
use crate::runner::{check_revision, is_repo, GitRunner};
use crate::types::{BlobId, Commit, CommitId, FileDiff, RepositoryFile};
use std::path::{Path, PathBuf};

/// Read access to a version-controlled history.
///
/// Commit listings are newest first unless `reverse` is set. Paths are relative to [`Repository::root`].
pub trait Repository {
    fn root(&self) -> &Path;

    /// Commits at positions `start..end` of the history listing; `None` runs to the oldest commit.
    fn commits(&self, start: usize, end: Option<usize>, reverse: bool) -> Result<Vec<Commit>>;

    /// Commits reachable from `end` (default `HEAD`) but not from `start`.
    fn commits_between(&self, start: &str, end: Option<&str>) -> Result<Vec<Commit>>;

    /// Every change the commit introduces relative to its parent.
    fn list_diffs(&self, commit_id: &str) -> Result<Vec<FileDiff>>;

    /// Files present after the commit that it added or modified. Deletions are skipped.
    fn list_diff_files(&self, commit_id: &str) -> Result<Vec<RepositoryFile>> {
        Ok(self
            .list_diffs(commit_id)?
            .into_iter()
            .filter_map(|diff| diff.after)
            .collect())
    }

    /// Blob content as text; binary blobs fail with [`RepositoryError::InvalidUtf8`].
    fn read_blob(&self, blob_id: &str) -> Result<String>;

    /// Content of `path` as of `commit_id`.
    fn read_file(&self, commit_id: &str, path: &Path) -> Result<String>;
}

/// [`Repository`] backed by the `git` executable.
#[derive(Debug, Clone)]
pub struct GitRepository {
    root: PathBuf,
    git: GitRunner,
}

const LOG_FORMAT: &str = "--format=%H%x09%s";

impl GitRepository {
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        if !is_repo(root) {
            return Err(RepositoryError::NotARepository(root.display().to_string()));
        }
        log::debug!("Opened git repository at {}", root.display());
        Ok(Self {
            root: root.to_path_buf(),
            git: GitRunner::new(root),
        })
    }

    fn log(&self, extra: &[&str]) -> Result<Vec<Commit>> {
        let mut args = vec!["log", LOG_FORMAT];
        args.extend_from_slice(extra);
        let output = self.git.run_text(&args)?;
        output.lines().map(parse_log_line).collect()
    }

    /// Resolve any revision to a full commit id.
    pub fn resolve_commit(&self, revision: &str) -> Result<CommitId> {
        check_revision(revision)?;
        let object = format!("{revision}^{{commit}}");
        let output = self.git.run_text(&["rev-parse", "--verify", &object])?;
        Ok(output.trim().to_string())
    }

    /// Blob id of a path at a revision.
    pub fn resolve_blob(&self, commit_id: &str, path: &Path) -> Result<BlobId> {
        check_revision(commit_id)?;
        let object = format!("{commit_id}:{}", path.to_string_lossy());
        let output = self.git.run_text(&["rev-parse", "--verify", &object])?;
        Ok(output.trim().to_string())
    }
}

fn parse_log_line(line: &str) -> Result<Commit> {
    let (commit_id, message) = line
        .split_once('\t')
        .ok_or_else(|| RepositoryError::Parse(format!("log line `{line}`")))?;
    Ok(Commit::new(commit_id, message))
}

impl Repository for GitRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn commits(&self, start: usize, end: Option<usize>, reverse: bool) -> Result<Vec<Commit>> {
        if let Some(end) = end {
            if end < start {
                return Err(RepositoryError::InvalidRange { start, end });
            }
        }
        let extra: &[&str] = if reverse { &["--reverse"] } else { &[] };
        let commits = self.log(extra)?;
        let end = end.unwrap_or(commits.len());
        Ok(commits
            .into_iter()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect())
    }

    fn commits_between(&self, start: &str, end: Option<&str>) -> Result<Vec<Commit>> {
        let end = end.unwrap_or("HEAD");
        check_revision(start)?;
        check_revision(end)?;
        let range = format!("{start}..{end}");
        self.log(&[range.as_str()])
    }

    fn list_diffs(&self, commit_id: &str) -> Result<Vec<FileDiff>> {
        check_revision(commit_id)?;
        let raw = self.git.run(&[
            "diff-tree",
            "-r",
            "-z",
            "--no-commit-id",
            "--root",
            commit_id,
        ])?;
        parse_raw_diff(&raw)
    }

    fn read_blob(&self, blob_id: &str) -> Result<String> {
        check_revision(blob_id)?;
        self.git.run_text(&["cat-file", "blob", blob_id])
    }

    fn read_file(&self, commit_id: &str, path: &Path) -> Result<String> {
        check_revision(commit_id)?;
        let object = format!("{commit_id}:{}", path.to_string_lossy());
        self.git.run_text(&["cat-file", "blob", &object])
    }
}
