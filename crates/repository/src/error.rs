use thiserror::Error;

pub type Result<T> = std::result::Result<T, RepositoryError>;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Not a git repository: {0}")]
    NotARepository(String),

    #[error("Invalid commit range: start={start}, end={end}")]
    InvalidRange { start: usize, end: usize },

    #[error("Invalid revision: {0}")]
    InvalidRevision(String),

    #[error("`{command}` failed: {stderr}")]
    Git { command: String, stderr: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Output of `{0}` is not valid UTF-8")]
    InvalidUtf8(String),

    #[error("Unexpected git output: {0}")]
    Parse(String),
}
