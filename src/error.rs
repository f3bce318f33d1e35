use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SetupError>;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Download failed: {url}: {message}")]
    Download { url: String, message: String },

    #[error("Extraction failed: {path}: {message}")]
    Extraction { path: PathBuf, message: String },

    #[error("Archive did not contain expected directory '{dir_name}'")]
    ArchiveLayout { dir_name: String },

    #[error("Destination already exists: {path}")]
    DestinationExists { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },
}

impl SetupError {
    pub fn download<U: Into<String>, M: ToString>(url: U, message: M) -> Self {
        SetupError::Download {
            url: url.into(),
            message: message.to_string(),
        }
    }

    pub fn extraction<P: Into<PathBuf>, M: ToString>(path: P, message: M) -> Self {
        SetupError::Extraction {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Maps an I/O error on `path`, singling out permission failures.
    pub fn from_io(error: std::io::Error, path: &std::path::Path) -> Self {
        match error.kind() {
            std::io::ErrorKind::PermissionDenied => SetupError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => SetupError::Io(error),
        }
    }
}
