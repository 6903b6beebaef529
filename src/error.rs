use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TallyError>;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("Failed to open commit log '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse line '{line}' error {source}")]
    ParseCount {
        line: String,
        source: ParseIntError,
    },
    #[error("line '{line}' overflows the running line counts")]
    Overflow { line: String },
}
