// src/error.rs
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Failures that abort a job. Everything softer (missing selector,
/// unbalanced markup, failed translation call) is handled in place.
#[derive(Debug)]
pub enum Error {
    /// Reading or writing a file failed.
    Io { path: PathBuf, source: io::Error },
    /// The content store is not valid JSON.
    Json { path: PathBuf, source: serde_json::Error },
    /// The content store parsed, but is not an array of objects.
    StoreShape { path: PathBuf, detail: String },
    /// A required input file does not exist.
    Missing(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn io(path: &Path, source: io::Error) -> Self {
        Error::Io { path: path.to_path_buf(), source }
    }

    pub fn json(path: &Path, source: serde_json::Error) -> Self {
        Error::Json { path: path.to_path_buf(), source }
    }

    pub fn shape(path: &Path, detail: impl Into<String>) -> Self {
        Error::StoreShape { path: path.to_path_buf(), detail: detail.into() }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            Error::Json { path, source } => write!(f, "{}: invalid JSON: {}", path.display(), source),
            Error::StoreShape { path, detail } => write!(f, "{}: unexpected store format: {}", path.display(), detail),
            Error::Missing(path) => write!(f, "{} not found", path.display()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}
