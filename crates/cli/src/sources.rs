use anyhow::{bail, Result};
use gitspect_segmenter::Language;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Files larger than this are skipped while walking directories
const MAX_FILE_SIZE_BYTES: u64 = 4 * 1024 * 1024;

/// Expand the command-line paths into the files to segment.
///
/// Explicit files are kept as given. Directories are walked (.gitignore aware, hidden entries
/// skipped) and only files of a supported language are kept, sorted for stable output.
pub(crate) fn collect_sources(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            files.extend(walk_directory(path));
        } else {
            bail!("Path does not exist: {}", path.display());
        }
    }
    Ok(files)
}

fn walk_directory(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(true)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true);

    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("Skipping unreadable entry under {}: {err}", root.display());
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        if !Language::from_path(path).supports_segmentation() {
            continue;
        }
        if let Ok(meta) = entry.metadata() {
            if meta.len() > MAX_FILE_SIZE_BYTES {
                log::warn!(
                    "Skipping large file {} ({} bytes > {})",
                    path.display(),
                    meta.len(),
                    MAX_FILE_SIZE_BYTES
                );
                continue;
            }
        }
        files.push(path.to_path_buf());
    }

    files.sort();
    log::debug!("Found {} source files under {}", files.len(), root.display());
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_walk_keeps_supported_languages() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("pkg/sub")).unwrap();
        fs::create_dir_all(root.join(".hidden")).unwrap();
        fs::write(root.join("pkg/a.py"), "x = 1\n").unwrap();
        fs::write(root.join("pkg/sub/rules.bzl"), "x = 1\n").unwrap();
        fs::write(root.join("pkg/BUILD"), "x = 1\n").unwrap();
        fs::write(root.join("pkg/readme.md"), "# hi\n").unwrap();
        fs::write(root.join(".hidden/b.py"), "x = 1\n").unwrap();

        let files = collect_sources(&[root.to_path_buf()]).unwrap();
        let relative: Vec<_> = files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            relative,
            vec![
                PathBuf::from("pkg/BUILD"),
                PathBuf::from("pkg/a.py"),
                PathBuf::from("pkg/sub/rules.bzl"),
            ]
        );
    }

    #[test]
    fn test_explicit_file_is_kept_and_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let notes = dir.path().join("notes.txt");
        fs::write(&notes, "plain\n").unwrap();

        assert_eq!(collect_sources(&[notes.clone()]).unwrap(), vec![notes]);
        assert!(collect_sources(&[dir.path().join("missing.py")]).is_err());
    }
}
