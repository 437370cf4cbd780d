use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Output error: unable to create [{path}] | {source}")]
    Create {
        path: PathBuf,
        source: io::Error
    },
    #[error("Output error: {0}")]
    Io(#[from] io::Error),
    #[error("Output error: {0}")]
    Csv(#[from] csv::Error)
}

impl OutputError {
    pub fn create(path: &Path, source: io::Error) -> Self {
        Self::Create {
            path: path.to_path_buf(),
            source
        }
    }
}
