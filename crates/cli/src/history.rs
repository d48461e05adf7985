use anyhow::{Context as AnyhowContext, Result};
use clap::Args;
use gitspect_repository::{Commit, Repository, RepositoryError};
use gitspect_segmenter::{Language, SegmentationStats, Segmenter};

use crate::report::DocumentReport;

/// Which commits `commits` and `history` operate on
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct CommitSelection {
    /// First position in the history listing (0 = newest, or oldest with --reverse)
    #[arg(long, default_value_t = 0)]
    pub start: usize,

    /// Position after the last selected commit
    #[arg(long)]
    pub end: Option<usize>,

    /// List oldest commits first
    #[arg(long)]
    pub reverse: bool,

    /// Select commits after this revision instead of by position
    #[arg(long, conflicts_with_all = ["start", "end"])]
    pub from: Option<String>,

    /// Upper revision for --from (default HEAD)
    #[arg(long, requires = "from")]
    pub to: Option<String>,
}

pub(crate) fn select_commits<R: Repository + ?Sized>(
    repo: &R,
    selection: &CommitSelection,
) -> Result<Vec<Commit>> {
    let commits = match &selection.from {
        Some(from) => {
            let mut commits = repo
                .commits_between(from, selection.to.as_deref())
                .with_context(|| format!("Failed to list commits after {from}"))?;
            if selection.reverse {
                commits.reverse();
            }
            commits
        }
        None => repo
            .commits(selection.start, selection.end, selection.reverse)
            .context("Failed to list commits")?,
    };
    log::debug!("Selected {} commits", commits.len());
    Ok(commits)
}

/// Segment every file each commit touched, as it was right after that commit.
///
/// Unless `all_files` is set, only files of a supported language are read. Binary blobs are skipped.
pub(crate) fn segment_history<R: Repository + ?Sized>(
    repo: &R,
    segmenter: &Segmenter,
    commits: &[Commit],
    all_files: bool,
) -> Result<Vec<DocumentReport>> {
    let mut reports = Vec::new();
    let mut totals = SegmentationStats::default();
    for commit in commits {
        let files = repo
            .list_diff_files(&commit.commit_id)
            .with_context(|| format!("Failed to list files of commit {}", commit.commit_id))?;

        for file in files {
            if !all_files && !Language::from_path(&file.path).supports_segmentation() {
                log::debug!("Skipping {} (unsupported language)", file.path.display());
                continue;
            }
            let content = match repo.read_blob(&file.blob_id) {
                Ok(content) => content,
                Err(RepositoryError::InvalidUtf8(_)) => {
                    log::warn!(
                        "Skipping binary file {} at {}",
                        file.path.display(),
                        commit.short_id()
                    );
                    continue;
                }
                Err(err) => {
                    return Err(err).with_context(|| {
                        format!("Failed to read {} at {}", file.path.display(), commit.commit_id)
                    })
                }
            };

            let name = format!("{}@{}", file.path.display(), commit.commit_id);
            let doc = segmenter.segment_str(name, &content);
            totals.merge(&doc.stats());
            reports.push(DocumentReport::at_commit(&doc, commit));
        }
    }
    log::info!(
        "Segmented {} documents across {} commits of {} | {totals}",
        reports.len(),
        commits.len(),
        repo.root().display()
    );
    Ok(reports)
}
