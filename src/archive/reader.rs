//! Archive reader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value;
use zip::ZipArchive;

use crate::descriptor::{parse_document, PACK_FILENAME, TOKENS_DIR};
use crate::error::{GbtkError, Result};
use crate::output::display_path;

/// An opened archive: its entry names and its parsed `pack.json`.
#[derive(Debug)]
pub struct PackArchive {
    entries: Vec<String>,
    document: Value,
}

impl PackArchive {
    /// Every entry name in the archive.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The untyped `pack.json` document.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Whether any entry lives under `tokens/`.
    pub fn has_tokens_dir(&self) -> bool {
        let prefix = format!("{TOKENS_DIR}/");
        self.entries.iter().any(|e| e.starts_with(&prefix))
    }
}

/// Open an archive and parse its root `pack.json`.
///
/// Fails if the file is missing, is not a ZIP container, has no root
/// `pack.json`, or its `pack.json` is not valid JSON.
pub fn open_archive(path: &Path) -> Result<PackArchive> {
    if !path.is_file() {
        return Err(GbtkError::NotFound {
            message: format!("File not found at '{}'", display_path(path)),
            help: None,
        });
    }

    let file = File::open(path).map_err(|e| GbtkError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to open archive: {}", e),
    })?;

    let mut archive = ZipArchive::new(file).map_err(|e| GbtkError::Archive {
        message: format!("'{}' is not a valid ZIP archive: {}", display_path(path), e),
        help: None,
    })?;

    let entries: Vec<String> = archive.file_names().map(str::to_string).collect();

    if !entries.iter().any(|e| e == PACK_FILENAME) {
        return Err(GbtkError::Archive {
            message: format!("Missing '{}' at the root of the archive", PACK_FILENAME),
            help: Some(format!(
                "Token packs must contain '{}' next to the '{}/' directory",
                PACK_FILENAME, TOKENS_DIR
            )),
        });
    }

    let mut bytes = Vec::new();
    archive
        .by_name(PACK_FILENAME)?
        .read_to_end(&mut bytes)
        .map_err(|e| GbtkError::Archive {
            message: format!("Could not read '{}': {}", PACK_FILENAME, e),
            help: None,
        })?;

    let document = parse_document(&bytes)?;

    Ok(PackArchive {
        entries,
        document,
    })
}
