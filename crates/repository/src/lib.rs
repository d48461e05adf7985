//! # Gitspect Repository
//!
//! Read-only view of a git history for segmenting files as they existed at each commit.
//!
//! All access goes through the `git` executable (`git -C <root> ...`); nothing is cached.
//!
//! ## Example
//!
//! ```no_run
//! use gitspect_repository::{GitRepository, Repository};
//!
//! # fn main() -> gitspect_repository::Result<()> {
//! let repo = GitRepository::open(".")?;
//! for commit in repo.commits(0, Some(5), false)? {
//!     for file in repo.list_diff_files(&commit.commit_id)? {
//!         let content = repo.read_blob(&file.blob_id)?;
//!         println!("{} {} {}", commit, file.path.display(), content.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod diff;
mod error;
mod repository;
mod runner;
mod types;

pub use error::{RepositoryError, Result};
pub use repository::{GitRepository, Repository};
pub use types::{BlobId, ChangeStatus, Commit, CommitId, FileDiff, RepositoryFile};
