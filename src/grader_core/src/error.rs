use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraderError {
    #[error("{} does not exist. Exiting.", .0.display())]
    MissingFile(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Failed to parse checks file {}: {source}", .path.display())]
    Checks {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to parse CSS selector '{selector}'.\nError: {reason}")]
    InvalidSelector { selector: String, reason: String },
    #[error("Failed to stage fetched content in {}: {source}", .path.display())]
    Scratch {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type GraderResult<T> = Result<T, GraderError>;
