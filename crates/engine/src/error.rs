use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Directory not found: '{path}'")]
    DirectoryNotFound { path: PathBuf },

    #[error("Not a directory: '{path}'")]
    NotADirectory { path: PathBuf },

    #[error("Permission denied: '{path}'")]
    PermissionDenied { path: PathBuf },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// Classify an I/O failure on `path` that came from reading a file.
    pub(crate) fn file_read(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            Self::PermissionDenied { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
