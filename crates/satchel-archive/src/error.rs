use std::fmt;
use std::io;
use std::path::PathBuf;

use zip::result::ZipError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open archive '{path}': {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("invalid zip archive: {0}")]
    InvalidArchive(#[source] ZipError),

    #[error("{resolved}: illegal file path")]
    ZipSlip { entry: String, resolved: PathBuf },

    #[error("failed to open entry #{index}: {source}")]
    EntryOpen { index: usize, source: ZipError },

    #[error("failed to create directory '{path}': {source}")]
    DirectoryCreationFailed { path: PathBuf, source: io::Error },

    #[error("failed to create file '{path}': {source}")]
    FileCreationFailed { path: PathBuf, source: io::Error },

    #[error("failed to extract '{path}': {source}")]
    CopyFailed { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

/// An extraction that stopped early.
///
/// `extracted` holds every path produced before the failure, in archive
/// order, including the path of the entry that failed if it got past the
/// path check.
#[derive(Debug)]
pub struct Interrupted {
    pub extracted: Vec<PathBuf>,
    pub error: Error,
}

impl Interrupted {
    pub fn new(extracted: Vec<PathBuf>, error: Error) -> Self {
        Self { extracted, error }
    }

    pub fn into_error(self) -> Error {
        self.error
    }
}

impl fmt::Display for Interrupted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl std::error::Error for Interrupted {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl From<Interrupted> for Error {
    fn from(e: Interrupted) -> Self {
        e.error
    }
}
