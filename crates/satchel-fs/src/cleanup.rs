use std::fs::File;
use std::io;
use std::path::Path;

use crate::{Error, Result};

/// What to do when a cleanup that nobody can observe fails, e.g. on drop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log the failure and carry on.
    #[default]
    Log,
    /// Log the failure and exit the process with status 1.
    Abort,
}

impl FailurePolicy {
    pub fn handle(self, result: Result<()>) {
        let Err(err) = result else {
            return;
        };
        tracing::error!(error = %err, "temporary resource cleanup failed");
        if self == Self::Abort {
            std::process::exit(1);
        }
    }
}

/// Exit the process if `result` is a cleanup failure.
pub fn exit_on_failure(result: Result<()>) {
    FailurePolicy::Abort.handle(result)
}

/// Close `file` and delete it from `path`.
///
/// Pending data is flushed before the handle is released so that a
/// deferred write error surfaces here instead of being dropped.
pub fn cleanup(file: File, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if let Err(source) = file.sync_data() {
        // Windows refuses to flush a handle opened without write access.
        let read_only = cfg!(windows) && source.kind() == io::ErrorKind::PermissionDenied;
        if !read_only {
            return Err(Error::Close {
                path: path.to_path_buf(),
                source,
            });
        }
    }
    drop(file);

    std::fs::remove_file(path).map_err(|source| Error::Remove {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "removed temp file");
    Ok(())
}

/// Recursively delete the folder at `path`. A missing folder is not an error.
pub fn cleanup_folder(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    match std::fs::remove_dir_all(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "removed temp folder");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(Error::Remove {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{in_child, run_in_child};
    use std::io::Write;
    use tempfile::tempdir;

    fn remove_error() -> Error {
        Error::Remove {
            path: "/nowhere".into(),
            source: io::Error::other("boom"),
        }
    }

    #[test]
    fn test_cleanup_removes_file() -> Result<()> {
        let dir = tempdir().map_err(Error::Create)?;
        let path = dir.path().join("tmp.txt");
        let mut file = File::create(&path).map_err(Error::Create)?;
        file.write_all(b"data").map_err(Error::Create)?;

        cleanup(file, &path)?;

        assert!(!path.exists());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_cleanup_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tmp.txt");
        let file = File::create(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let result = cleanup(file, &path);
        assert!(matches!(result, Err(Error::Remove { .. })));
    }

    #[test]
    fn test_cleanup_folder_removes_tree() -> Result<()> {
        let dir = tempdir().map_err(Error::Create)?;
        let root = dir.path().join("tree");
        std::fs::create_dir_all(root.join("a/b")).unwrap();
        std::fs::write(root.join("a/b/c.txt"), "data").unwrap();
        std::fs::write(root.join("top.txt"), "data").unwrap();

        cleanup_folder(&root)?;

        assert!(!root.exists());
        Ok(())
    }

    #[test]
    fn test_cleanup_folder_missing_is_ok() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("never-created");
        assert!(cleanup_folder(&missing).is_ok());
        assert!(cleanup_folder(&missing).is_ok());
    }

    #[test]
    fn test_cleanup_read_only_handle() -> Result<()> {
        let dir = tempdir().map_err(Error::Create)?;
        let path = dir.path().join("tmp.txt");
        std::fs::write(&path, "data").map_err(Error::Create)?;
        let file = File::open(&path).map_err(Error::Create)?;

        cleanup(file, &path)?;

        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_failure_policy_log_returns() {
        FailurePolicy::Log.handle(Err(remove_error()));
        FailurePolicy::Abort.handle(Ok(()));
        exit_on_failure(Ok(()));
    }

    #[test]
    fn test_exit_on_failure_exits_with_status_1() {
        if in_child() {
            exit_on_failure(Err(remove_error()));
            return;
        }
        let status = run_in_child("cleanup::tests::test_exit_on_failure_exits_with_status_1");
        assert_eq!(status.code(), Some(1));
    }

    #[test]
    fn test_failure_policy_abort_exits_with_status_1() {
        if in_child() {
            FailurePolicy::Abort.handle(Err(remove_error()));
            return;
        }
        let status = run_in_child("cleanup::tests::test_failure_policy_abort_exits_with_status_1");
        assert_eq!(status.code(), Some(1));
    }
}
