use crate::error::{RepositoryError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs `git -C <root> ...` and collects its output.
#[derive(Debug, Clone)]
pub(crate) struct GitRunner {
    root: PathBuf,
}

impl GitRunner {
    pub(crate) fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Raw stdout of a successful command; a non-zero exit becomes [`RepositoryError::Git`].
    pub(crate) fn run(&self, args: &[&str]) -> Result<Vec<u8>> {
        log::debug!("git -C {} {}", self.root.display(), args.join(" "));
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .args(args)
            .output()?;

        if !output.status.success() {
            return Err(RepositoryError::Git {
                command: format!("git {}", args.join(" ")),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output.stdout)
    }

    pub(crate) fn run_text(&self, args: &[&str]) -> Result<String> {
        let stdout = self.run(args)?;
        String::from_utf8(stdout)
            .map_err(|_| RepositoryError::InvalidUtf8(format!("git {}", args.join(" "))))
    }
}

/// Whether `path` lies inside a git work tree.
pub(crate) fn is_repo(path: &Path) -> bool {
    let output = Command::new("git")
        .arg("-C")
        .arg(path)
        .arg("rev-parse")
        .arg("--is-inside-work-tree")
        .output();
    match output {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout).trim() == "true"
        }
        _ => false,
    }
}

/// Revisions and object ids are passed as positional arguments; refuse anything git would read as an option.
pub(crate) fn check_revision(revision: &str) -> Result<()> {
    if revision.is_empty() || revision.starts_with('-') {
        return Err(RepositoryError::InvalidRevision(revision.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_revision() {
        assert!(check_revision("HEAD~2").is_ok());
        assert!(check_revision("a1b2c3").is_ok());
        assert!(check_revision("").is_err());
        assert!(check_revision("--output=/tmp/x").is_err());
    }

    #[test]
    fn test_failed_command_reports_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let runner = GitRunner::new(dir.path());
        match runner.run(&["rev-parse", "HEAD"]) {
            Err(RepositoryError::Git { command, stderr }) => {
                assert_eq!(command, "git rev-parse HEAD");
                assert!(!stderr.is_empty());
            }
            other => panic!("expected git failure, got {other:?}"),
        }
        assert!(!is_repo(dir.path()));
    }
}
