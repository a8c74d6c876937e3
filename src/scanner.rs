use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// A photo found by [`scan_directory`], identified by its file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to read folder: {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        source: walkdir::Error,
    },
}

const JPEG_SUFFIX: &str = ".jpg";

/// Lists the JPEG files directly inside `dir`.
///
/// Only regular files whose name case-insensitively ends in `.jpg` are
/// returned (`.jpeg` is not matched). Subdirectories are skipped silently;
/// files with unrepresentable names or unreadable metadata are skipped with a
/// warning. Order is whatever the filesystem returns, not sorted.
pub fn scan_directory(dir: &Path) -> Result<Vec<ImageFile>, ScanError> {
    let mut images = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| ScanError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            tracing::warn!(
                "failed to match against {JPEG_SUFFIX} for file: {:?}",
                entry.file_name()
            );
            continue;
        };
        if !name.to_lowercase().ends_with(JPEG_SUFFIX) {
            continue;
        }
        let size = match entry.metadata() {
            Ok(metadata) => metadata.len(),
            Err(err) => {
                tracing::warn!("failed to read metadata for file: {name} Error: {err}");
                continue;
            }
        };
        images.push(ImageFile {
            name: name.to_owned(),
            path: entry.into_path(),
            size,
        });
    }
    Ok(images)
}
