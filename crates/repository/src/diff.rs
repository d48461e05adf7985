//! Parsing of `git diff-tree -r -z` raw output.
//!
//! Each record is `:<old mode> <new mode> <old blob> <new blob> <status>` followed by a NUL and the
//! path. Rename and copy records carry a second path; they only appear with `-M`/`-C`, which are
//! never passed, but the parser still consumes them.

use crate::error::{RepositoryError, Result};
use crate::types::{ChangeStatus, FileDiff, RepositoryFile};
use std::path::{Path, PathBuf};

/// Blob id git prints for the missing side of an add or delete.
fn is_null_blob(blob_id: &str) -> bool {
    !blob_id.is_empty() && blob_id.bytes().all(|b| b == b'0')
}

fn side(path: &Path, blob_id: &str) -> Option<RepositoryFile> {
    (!is_null_blob(blob_id)).then(|| RepositoryFile::new(path, blob_id))
}

pub(crate) fn parse_raw_diff(raw: &[u8]) -> Result<Vec<FileDiff>> {
    let mut tokens = raw
        .split(|&b| b == 0)
        .filter(|token| !token.is_empty())
        .map(|token| String::from_utf8_lossy(token).into_owned());

    let mut diffs = Vec::new();
    while let Some(meta) = tokens.next() {
        let fields: Vec<&str> = meta.trim_start_matches(':').split_whitespace().collect();
        let [_, _, old_blob, new_blob, status] = fields.as_slice() else {
            return Err(RepositoryError::Parse(format!("diff record `{meta}`")));
        };
        let status_letter = status.chars().next().unwrap_or('X');
        let status = ChangeStatus::from_letter(status_letter);

        let path = tokens
            .next()
            .map(PathBuf::from)
            .ok_or_else(|| RepositoryError::Parse(format!("missing path after `{meta}`")))?;
        let after_path = if matches!(status, ChangeStatus::Renamed | ChangeStatus::Copied) {
            tokens
                .next()
                .map(PathBuf::from)
                .ok_or_else(|| RepositoryError::Parse(format!("missing target after `{meta}`")))?
        } else {
            path.clone()
        };

        diffs.push(FileDiff {
            status,
            before: side(&path, old_blob),
            after: side(&after_path, new_blob),
        });
    }
    Ok(diffs)
}
