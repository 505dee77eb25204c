use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WurzelError {
    #[error("Not inside a git working tree or bare repository: {path}")]
    NotARepository { path: PathBuf },

    #[error("Path is not valid Unicode: {path}")]
    NonUnicodePath { path: PathBuf },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WurzelError>;
