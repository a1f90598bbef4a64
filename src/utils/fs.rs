//! Filesystem helpers: size lookups, the atomic temp-file replace, and the
//! one-time backup mirror.

use std::fs;
use std::path::{Path, PathBuf};
use serde::Serialize;
use tracing::{debug, info, warn};
use crate::utils::{OptimizerError, OptimizerResult, is_image_path};

/// Marker written into the backup directory once a mirror has fully completed.
pub const BACKUP_COMPLETE_MARKER: &str = ".backup-complete";

/// Get file size in bytes
pub fn get_file_size(path: impl AsRef<Path>) -> OptimizerResult<u64> {
    fs::metadata(path.as_ref())
        .map(|m| m.len())
        .map_err(|e| OptimizerError::io(format!(
            "Failed to get file size of {}: {}", path.as_ref().display(), e
        )))
}

/// Check if a regular file exists at `path`
pub async fn file_exists(path: impl AsRef<Path>) -> bool {
    tokio::fs::metadata(path.as_ref())
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

/// Sibling path the encoder writes to before the rename: `<path>.tmp`.
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Replaces `path` with whatever `write` produces, via a sibling temp file.
///
/// The original is only touched by the final `rename`. If `write` or the
/// rename fails, the temp file is removed and the original is left as it was.
pub fn replace_atomically<F>(path: &Path, write: F) -> OptimizerResult<()>
where
    F: FnOnce(&Path) -> OptimizerResult<()>,
{
    let tmp = temp_path(path);

    let outcome = write(&tmp).and_then(|()| {
        fs::rename(&tmp, path).map_err(|e| OptimizerError::io(format!(
            "Failed to replace {}: {}", path.display(), e
        )))
    });

    if outcome.is_err() && tmp.exists() {
        if let Err(e) = fs::remove_file(&tmp) {
            warn!("Could not remove stale temp file {}: {}", tmp.display(), e);
        }
    }

    outcome
}

/// What [`ensure_backup`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum BackupOutcome {
    /// The backup directory already existed; nothing was copied.
    AlreadyPresent { complete: bool },
    /// A fresh mirror was written.
    Created { files_copied: usize },
}

/// Mirrors every image under `source_dir` into `backup_dir`, once.
///
/// An existing `backup_dir` is taken as-is, whatever its contents. Errors are
/// fatal to the caller: there is no partial-backup recovery.
pub fn ensure_backup(source_dir: &Path, backup_dir: &Path) -> OptimizerResult<BackupOutcome> {
    if backup_dir.exists() {
        let complete = backup_dir.join(BACKUP_COMPLETE_MARKER).exists();
        if complete {
            info!("Backup already exists at {}", backup_dir.display());
        } else {
            warn!(
                "Backup directory {} exists without a completion marker; it may be incomplete",
                backup_dir.display()
            );
        }
        return Ok(BackupOutcome::AlreadyPresent { complete });
    }

    if !source_dir.is_dir() {
        return Err(OptimizerError::io(format!(
            "Source directory does not exist: {}", source_dir.display()
        )));
    }

    info!("Creating backup: {} -> {}", source_dir.display(), backup_dir.display());
    fs::create_dir_all(backup_dir).map_err(|e| OptimizerError::io(format!(
        "Failed to create backup directory {}: {}", backup_dir.display(), e
    )))?;
    // The backup may live inside the source tree; never mirror it into itself.
    let backup_root = fs::canonicalize(backup_dir)?;
    let files_copied = copy_images_recursive(source_dir, backup_dir, &backup_root)?;
    fs::write(backup_dir.join(BACKUP_COMPLETE_MARKER), b"")?;
    info!("Backup complete ({} files)", files_copied);

    Ok(BackupOutcome::Created { files_copied })
}

fn copy_images_recursive(src: &Path, dst: &Path, backup_root: &Path) -> OptimizerResult<usize> {
    fs::create_dir_all(dst).map_err(|e| OptimizerError::io(format!(
        "Failed to create backup directory {}: {}", dst.display(), e
    )))?;

    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dst.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            if fs::canonicalize(&from)?.as_path() == backup_root {
                debug!("Skipping backup directory {}", from.display());
                continue;
            }
            copied += copy_images_recursive(&from, &to, backup_root)?;
        } else if is_image_path(&from) {
            fs::copy(&from, &to).map_err(|e| OptimizerError::io(format!(
                "Failed to back up {}: {}", from.display(), e
            )))?;
            debug!("Backed up {}", from.display());
            copied += 1;
        }
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn seed_source(root: &Path) {
        fs::create_dir_all(root.join("background-index")).unwrap();
        fs::write(root.join("background-index/1.jpg"), b"jpeg-1").unwrap();
        fs::write(root.join("logo.PNG"), b"png").unwrap();
        fs::write(root.join("photo.webp"), b"webp").unwrap();
        fs::write(root.join("robots.txt"), b"User-agent: *").unwrap();
        fs::write(root.join("background-index/notes.md"), b"# notes").unwrap();
    }

    #[test]
    fn temp_path_is_a_sibling_with_tmp_suffix() {
        assert_eq!(temp_path(Path::new("public/a.jpg")), PathBuf::from("public/a.jpg.tmp"));
    }

    #[test]
    fn backup_mirrors_images_only() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("public");
        let backup = dir.path().join("public-backup");
        seed_source(&source);

        let outcome = ensure_backup(&source, &backup).unwrap();

        assert_eq!(outcome, BackupOutcome::Created { files_copied: 3 });
        assert_eq!(fs::read(backup.join("background-index/1.jpg")).unwrap(), b"jpeg-1");
        assert!(backup.join("logo.PNG").exists());
        assert!(backup.join("photo.webp").exists());
        assert!(!backup.join("robots.txt").exists());
        assert!(!backup.join("background-index/notes.md").exists());
        assert!(backup.join(BACKUP_COMPLETE_MARKER).exists());
    }

    #[test]
    fn second_backup_copies_nothing() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("public");
        let backup = dir.path().join("public-backup");
        seed_source(&source);

        ensure_backup(&source, &backup).unwrap();
        fs::write(source.join("background-index/1.jpg"), b"optimized").unwrap();
        fs::write(source.join("new.jpg"), b"new").unwrap();

        let outcome = ensure_backup(&source, &backup).unwrap();

        assert_eq!(outcome, BackupOutcome::AlreadyPresent { complete: true });
        assert_eq!(fs::read(backup.join("background-index/1.jpg")).unwrap(), b"jpeg-1");
        assert!(!backup.join("new.jpg").exists());
    }

    #[test]
    fn existing_backup_without_marker_is_reported_incomplete() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("public");
        let backup = dir.path().join("public-backup");
        seed_source(&source);
        fs::create_dir_all(&backup).unwrap();

        let outcome = ensure_backup(&source, &backup).unwrap();

        assert_eq!(outcome, BackupOutcome::AlreadyPresent { complete: false });
        assert!(!backup.join("logo.PNG").exists());
    }

    #[test]
    fn backup_nested_in_source_is_not_mirrored_into_itself() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("public");
        let backup = source.join("originals");
        seed_source(&source);

        let outcome = ensure_backup(&source, &backup).unwrap();

        assert_eq!(outcome, BackupOutcome::Created { files_copied: 3 });
        assert!(backup.join("background-index/1.jpg").exists());
        assert!(!backup.join("originals").exists());
        assert!(backup.join(BACKUP_COMPLETE_MARKER).exists());
    }

    #[test]
    fn missing_source_is_fatal() {
        let dir = tempdir().unwrap();
        let result = ensure_backup(&dir.path().join("nope"), &dir.path().join("backup"));
        assert!(matches!(result, Err(OptimizerError::IO(_))));
    }

    #[test]
    fn failed_write_leaves_original_and_no_temp() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("card.jpg");
        fs::write(&target, b"original bytes").unwrap();

        let result = replace_atomically(&target, |tmp| {
            fs::write(tmp, b"half-writ")?;
            Err(OptimizerError::encode("simulated encoder crash"))
        });

        assert!(result.is_err());
        assert_eq!(fs::read(&target).unwrap(), b"original bytes");
        assert!(!temp_path(&target).exists());
    }

    #[test]
    fn successful_write_replaces_original() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("card.jpg");
        fs::write(&target, b"original bytes").unwrap();

        replace_atomically(&target, |tmp| Ok(fs::write(tmp, b"smaller")?)).unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"smaller");
        assert!(!temp_path(&target).exists());
    }
}
