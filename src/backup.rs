//! Profile backup
//!
//! Copies a profile tree before anything in it is modified. Symbolic links
//! are recreated as links and an existing backup is merged into: colliding
//! names are overwritten, everything else at the destination is kept.

use crate::error::{Error, Result};
use crate::profile::ProfileCandidate;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Suffix appended to the profile name to form the backup directory name
const BACKUP_SUFFIX: &str = "-backup";

/// Backup location for `profile` below `backup_root`
///
/// ```rust
/// use ffhrd::{backup_destination, ProfileCandidate};
/// use std::path::Path;
///
/// let profile = ProfileCandidate::new("/ff/x1y2.default");
/// let dest = backup_destination(Path::new("/home/alice/ffhrd"), &profile);
/// assert_eq!(dest, Path::new("/home/alice/ffhrd/x1y2.default-backup"));
/// ```
pub fn backup_destination(backup_root: &Path, profile: &ProfileCandidate) -> PathBuf {
    backup_root.join(format!("{}{}", profile.name(), BACKUP_SUFFIX))
}

/// Back up `profile` into `backup_root` and return the backup directory
pub fn backup_profile(profile: &ProfileCandidate, backup_root: &Path) -> Result<PathBuf> {
    let destination = backup_destination(backup_root, profile);
    tracing::info!(
        from = %profile.path.display(),
        to = %destination.display(),
        "backing up profile"
    );

    copy_tree(&profile.path, &destination).map_err(|source| Error::BackupFailed {
        source_dir: profile.path.clone(),
        destination: destination.clone(),
        source,
    })?;

    Ok(destination)
}

/// Recursively copy `src` into `dst`, keeping symbolic links as links
pub fn copy_tree(src: &Path, dst: &Path) -> io::Result<()> {
    if !src.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} is not a directory", src.display()),
        ));
    }
    fs::create_dir_all(dst)?;

    for entry in walkdir::WalkDir::new(src).min_depth(1).follow_links(false) {
        let entry = entry.map_err(io::Error::from)?;
        let rel_path = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        let target = dst.join(rel_path);
        let file_type = entry.file_type();

        if file_type.is_symlink() {
            let link_target = fs::read_link(entry.path())?;
            if fs::symlink_metadata(&target).is_ok() {
                remove_entry(&target)?;
            }
            create_symlink(&link_target, entry.path(), &target)?;
        } else if file_type.is_dir() {
            if fs::symlink_metadata(&target).is_ok_and(|m| !m.is_dir()) {
                remove_entry(&target)?;
            }
            fs::create_dir_all(&target)?;
        } else {
            // fs::copy would write through a link left by an earlier backup
            if fs::symlink_metadata(&target).is_ok_and(|m| !m.is_file()) {
                remove_entry(&target)?;
            }
            fs::copy(entry.path(), &target)?;
        }
        tracing::trace!(path = %rel_path.display(), "copied");
    }

    Ok(())
}

fn remove_entry(path: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

#[cfg(unix)]
fn create_symlink(link_target: &Path, _original: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(link_target, link)
}

#[cfg(windows)]
fn create_symlink(link_target: &Path, original: &Path, link: &Path) -> io::Result<()> {
    // Windows distinguishes file and directory links
    if fs::metadata(original).map(|m| m.is_dir()).unwrap_or(false) {
        std::os::windows::fs::symlink_dir(link_target, link)
    } else {
        std::os::windows::fs::symlink_file(link_target, link)
    }
}
