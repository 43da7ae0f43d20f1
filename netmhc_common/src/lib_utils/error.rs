use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MhcError>;

#[derive(Debug, Error)]
pub enum MhcError {
    #[error("File {path:?} could not be accessed - {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unsupported netMHC version provided: {0:?}. Expected one of 3.4, 4.0, pan")]
    UnsupportedVersion(String),
    #[error("Number of chunks must be greater than 0")]
    InvalidChunkCount,
    #[error("Peptide length {0:?} is not a positive integer")]
    InvalidLength(String),
    #[error("Refusing to overwrite {0:?}: the file name has no \"output\" to replace with \"data\"")]
    OutputWouldOverwriteInput(PathBuf),
}

impl MhcError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> MhcError {
        MhcError::Io { path: path.into(), source }
    }
}
