use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve an archive entry name against `base`.
///
/// The result is lexically cleaned and must lie strictly below the cleaned
/// `base`. Absolute names and names that climb out of `base` are rejected.
pub fn resolve_entry_path(entry: &str, base: &Path) -> Result<PathBuf> {
    let entry_path = Path::new(entry);
    let base = clean_path(base);

    // Rejected outright rather than re-rooted under `base`.
    let rooted = entry_path
        .components()
        .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)));
    if rooted {
        return Err(Error::ZipSlip {
            entry: entry.to_string(),
            resolved: clean_path(entry_path),
        });
    }

    let resolved = clean_path(&base.join(entry_path));

    let escapes = resolved == base
        || !resolved.starts_with(&base)
        || (base.as_os_str().is_empty() && resolved.starts_with(".."));
    if escapes {
        return Err(Error::ZipSlip {
            entry: entry.to_string(),
            resolved,
        });
    }

    Ok(resolved)
}

/// Drop `.` and fold `..` into its parent without touching the filesystem.
///
/// Leading `..` of a relative path is kept; `..` directly under the root is
/// dropped.
fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    parts.iter().collect()
}
