use std::path::PathBuf;
use thiserror::Error;

/// Failures that can occur while fetching the catalog or a badge
#[derive(Debug, Error)]
pub enum BadgeError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{}: {source}", path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write progress output: {0}")]
    Output(#[from] std::io::Error),
}

impl BadgeError {
    pub fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BadgeError::FileSystem {
            path: path.into(),
            source,
        }
    }
}
