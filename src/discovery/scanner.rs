//! File system scanner for a pack's tokens directory.
//!
//! Only files directly inside the directory are considered; nested
//! directories are neither descended into nor packaged.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{GbtkError, Result};

/// File extensions (lower-case, without the dot) offered as token images.
pub const IMAGE_EXTENSIONS: &[&str] = &["svg", "png", "jpg", "jpeg"];

/// Files found directly inside a tokens directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Every regular file found, sorted by file name.
    pub files: Vec<PathBuf>,
}

impl ScanResult {
    /// Files whose extension is on the image allow-list, in file name order.
    pub fn images(&self) -> impl Iterator<Item = &PathBuf> {
        self.files.iter().filter(|path| is_token_image(path))
    }
}

/// List the regular files directly inside `dir`.
///
/// Symlinks are followed, so a link to a regular file counts as a file.
/// A missing directory yields an empty result; any error while listing an
/// existing one (unreadable directory, dangling link) is returned.
pub fn scan_directory(dir: &Path) -> Result<ScanResult> {
    let mut result = ScanResult::default();

    if !dir.is_dir() {
        return Ok(result);
    }

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| GbtkError::Io {
            path: e.path().unwrap_or(dir).to_path_buf(),
            message: format!("Failed to list token files: {}", e),
        })?;

        if entry.file_type().is_file() {
            result.files.push(entry.into_path());
        }
    }

    Ok(result)
}

/// Check whether a path has one of the image extensions (case-insensitive).
pub fn is_token_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
