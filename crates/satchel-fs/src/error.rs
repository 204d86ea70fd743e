use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to close temp file '{path}': {source}")]
    Close { path: PathBuf, source: io::Error },

    #[error("unable to remove '{path}': {source}")]
    Remove { path: PathBuf, source: io::Error },

    #[error("unable to create scratch space: {0}")]
    Create(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
