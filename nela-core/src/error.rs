use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NelaError {
    #[error("failed to load resource {}: {source}", .path.display())]
    ResourceLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl NelaError {
    pub(crate) fn resource(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::ResourceLoad {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

pub type Result<T, E = NelaError> = std::result::Result<T, E>;
