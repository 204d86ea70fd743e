use std::fs::File;
use std::path::Path;

use tempfile::{NamedTempFile, TempDir};

use crate::cleanup::{FailurePolicy, cleanup, cleanup_folder};
use crate::{Error, Result};

const DEFAULT_PREFIX: &str = "satchel-";

/// A temporary directory released on `close()` or drop.
pub struct ScratchDir {
    dir: Option<TempDir>,
    policy: FailurePolicy,
}

impl ScratchDir {
    pub fn new() -> Result<Self> {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    pub fn with_prefix(prefix: &str) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(prefix)
            .tempdir()
            .map_err(Error::Create)?;
        tracing::debug!(path = %dir.path().display(), "created scratch folder");
        Ok(Self {
            dir: Some(dir),
            policy: FailurePolicy::default(),
        })
    }

    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn path(&self) -> &Path {
        match &self.dir {
            Some(dir) => dir.path(),
            None => Path::new(""),
        }
    }

    /// Remove the directory now and report the outcome.
    pub fn close(mut self) -> Result<()> {
        self.release()
    }

    fn release(&mut self) -> Result<()> {
        let Some(dir) = self.dir.take() else {
            return Ok(());
        };
        let result = cleanup_folder(dir.path());
        // `TempDir`'s own drop is a no-op once the tree is gone.
        drop(dir);
        result
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let result = self.release();
        self.policy.handle(result);
    }
}

/// An open temporary file released on `close()` or drop.
pub struct ScratchFile {
    file: Option<NamedTempFile>,
    policy: FailurePolicy,
}

impl ScratchFile {
    pub fn new() -> Result<Self> {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    pub fn with_prefix(prefix: &str) -> Result<Self> {
        let file = tempfile::Builder::new()
            .prefix(prefix)
            .tempfile()
            .map_err(Error::Create)?;
        Ok(Self {
            file: Some(file),
            policy: FailurePolicy::default(),
        })
    }

    /// Create the file inside `dir`, e.g. a [`ScratchDir`].
    pub fn new_in(dir: impl AsRef<Path>) -> Result<Self> {
        let file = tempfile::Builder::new()
            .prefix(DEFAULT_PREFIX)
            .tempfile_in(dir)
            .map_err(Error::Create)?;
        Ok(Self {
            file: Some(file),
            policy: FailurePolicy::default(),
        })
    }

    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn path(&self) -> &Path {
        match &self.file {
            Some(file) => file.path(),
            None => Path::new(""),
        }
    }

    pub fn as_file(&self) -> Option<&File> {
        self.file.as_ref().map(|f| f.as_file())
    }

    pub fn as_file_mut(&mut self) -> Option<&mut File> {
        self.file.as_mut().map(|f| f.as_file_mut())
    }

    /// Close the handle and delete the file now.
    pub fn close(mut self) -> Result<()> {
        self.release()
    }

    fn release(&mut self) -> Result<()> {
        let Some(file) = self.file.take() else {
            return Ok(());
        };
        let (handle, path) = file.into_parts();
        let result = cleanup(handle, &path);
        drop(path);
        result
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let result = self.release();
        self.policy.handle(result);
    }
}
