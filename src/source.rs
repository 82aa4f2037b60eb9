//! Source loading: read one caller-named bookmark file into memory.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0} is not a regular file")]
    NotAFile(PathBuf),
}

/// Read the whole file at `path`.
pub fn load(path: &Path) -> Result<Vec<u8>, SourceError> {
    let io_error = |source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    };
    let metadata = std::fs::metadata(path).map_err(io_error)?;
    if !metadata.is_file() {
        return Err(SourceError::NotAFile(path.to_path_buf()));
    }
    std::fs::read(path).map_err(io_error)
}
