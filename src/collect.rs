//! Photo discovery.
//!
//! Scans the immediate entries of each input directory and keeps the files
//! whose names end with a recognized image extension.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::PasteError;

/// Recognized image extensions, matched case-insensitively against the file name.
pub const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".bmp", ".gif", ".tiff", ".webp"];

/// Check whether a file name carries one of the recognized image extensions.
pub fn is_photo_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Collect photo paths from the given directories.
///
/// Directories are scanned in argument order, entries in the order the
/// filesystem lists them. Subdirectories are not descended into. Any
/// directory that cannot be listed aborts the whole collection.
pub fn collect<P: AsRef<Path>>(directories: &[P]) -> Result<Vec<PathBuf>, PasteError> {
    let mut photos = Vec::new();

    for dir in directories {
        let dir = dir.as_ref();
        let found = collect_dir(dir)?;
        debug!(dir = %dir.display(), count = found.len(), "scanned directory");
        photos.extend(found);
    }

    Ok(photos)
}

fn collect_dir(dir: &Path) -> Result<Vec<PathBuf>, PasteError> {
    let not_found = |source| PasteError::DirectoryNotFound {
        path: dir.to_path_buf(),
        source,
    };

    let base = absolute(dir).map_err(not_found)?;
    let entries = fs::read_dir(dir).map_err(not_found)?;

    let mut photos = Vec::new();
    for entry in entries {
        let entry = entry.map_err(not_found)?;
        let name = entry.file_name();
        if is_photo_name(&name.to_string_lossy()) {
            photos.push(base.join(name));
        }
    }
    Ok(photos)
}

/// Make a path absolute against the working directory without resolving symlinks.
fn absolute(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
