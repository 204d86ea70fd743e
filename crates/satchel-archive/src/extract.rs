//! Zip extraction.
//!
//! # Platform Behavior
//!
//! **Unix**: files are created with the permission bits stored in the
//! archive, or `0o644` when the entry carries none. The process umask
//! still applies.
//!
//! **Windows**: stored modes are ignored.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::error::{Error, Interrupted, Result};
use crate::sanitize::resolve_entry_path;

#[cfg(unix)]
const DEFAULT_FILE_MODE: u32 = 0o644;

/// Extract the zip archive at `source` into `destination`.
///
/// Returns the destination path of every entry, files and directories, in
/// archive order. On failure the paths written so far come back inside
/// [`Interrupted`].
pub fn unzip(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
) -> std::result::Result<Vec<PathBuf>, Interrupted> {
    let source = source.as_ref();
    let file = File::open(source).map_err(|e| {
        Interrupted::new(
            Vec::new(),
            Error::Open {
                path: source.to_path_buf(),
                source: e,
            },
        )
    })?;

    tracing::debug!(
        archive = %source.display(),
        destination = %destination.as_ref().display(),
        "extracting archive"
    );
    unzip_reader(BufReader::new(file), destination)
}

/// Extract a zip archive read from any seekable reader.
pub fn unzip_reader<R: Read + Seek>(
    reader: R,
    destination: impl AsRef<Path>,
) -> std::result::Result<Vec<PathBuf>, Interrupted> {
    let destination = destination.as_ref();
    let mut extracted = Vec::new();

    match extract_entries(reader, destination, &mut extracted) {
        Ok(()) => {
            tracing::debug!(
                destination = %destination.display(),
                entries = extracted.len(),
                "archive extracted"
            );
            Ok(extracted)
        }
        Err(error) => {
            tracing::warn!(
                destination = %destination.display(),
                entries = extracted.len(),
                %error,
                "archive extraction interrupted"
            );
            Err(Interrupted::new(extracted, error))
        }
    }
}

fn extract_entries<R: Read + Seek>(
    reader: R,
    destination: &Path,
    extracted: &mut Vec<PathBuf>,
) -> Result<()> {
    let mut archive = ZipArchive::new(reader).map_err(Error::InvalidArchive)?;

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|source| Error::EntryOpen { index, source })?;

        let target = resolve_entry_path(entry.name(), destination)?;
        extracted.push(target.clone());

        if entry.is_dir() {
            ensure_directory(&target)?;
            continue;
        }

        if let Some(parent) = target.parent() {
            ensure_directory(parent)?;
        }

        let mut file = create_file(&target, entry.unix_mode())?;
        std::io::copy(&mut entry, &mut file).map_err(|source| Error::CopyFailed {
            path: target.clone(),
            source,
        })?;

        // Release both handles before the next entry.
        drop(file);
        drop(entry);
    }

    Ok(())
}

fn ensure_directory(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|source| Error::DirectoryCreationFailed {
        path: path.to_path_buf(),
        source,
    })
}

fn create_file(path: &Path, mode: Option<u32>) -> Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode.map_or(DEFAULT_FILE_MODE, |m| m & 0o7777));
    }
    #[cfg(not(unix))]
    let _ = mode;

    options.open(path).map_err(|source| Error::FileCreationFailed {
        path: path.to_path_buf(),
        source,
    })
}
