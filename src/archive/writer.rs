//! Archive writer.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::descriptor::{PackDescriptor, PACK_FILENAME, TOKENS_DIR};
use crate::discovery::{file_name_string, scan_directory};
use crate::error::{GbtkError, Result};
use crate::output::{display_path, Printer};

/// File extension of token pack archives.
pub const ARCHIVE_EXTENSION: &str = "gbtk";

/// Stem used when a pack name sanitises to nothing.
const UNTITLED_STEM: &str = "untitled_pack";

/// Derive the archive file stem from a pack name.
///
/// Keeps alphanumerics, spaces and underscores, trims trailing whitespace,
/// lower-cases, and turns spaces into underscores: `My Cool Pack!!`
/// becomes `my_cool_pack`.
pub fn archive_file_stem(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '_')
        .collect();
    let stem = kept.trim_end().to_lowercase().replace(' ', "_");

    if stem.is_empty() {
        UNTITLED_STEM.to_string()
    } else {
        stem
    }
}

/// Path of the archive for `descriptor`, beside `pack_dir`.
pub fn archive_path_for(pack_dir: &Path, descriptor: &PackDescriptor) -> Result<PathBuf> {
    let pack_dir = fs::canonicalize(pack_dir).map_err(|e| GbtkError::Io {
        path: pack_dir.to_path_buf(),
        message: format!("Failed to resolve pack directory: {}", e),
    })?;
    let parent = pack_dir.parent().unwrap_or(&pack_dir);

    Ok(parent.join(format!(
        "{}.{}",
        archive_file_stem(&descriptor.name),
        ARCHIVE_EXTENSION
    )))
}

/// Write the archive for `pack_dir` and return its path.
///
/// Every file directly inside `tokens/` is packaged, referenced or not.
/// On failure the partially written archive is removed.
pub fn write_archive(
    pack_dir: &Path,
    descriptor: &PackDescriptor,
    printer: &Printer,
) -> Result<PathBuf> {
    let archive_path = archive_path_for(pack_dir, descriptor)?;
    printer.status("Creating", &display_path(&archive_path));

    let file = File::create(&archive_path).map_err(|e| GbtkError::Io {
        path: archive_path.clone(),
        message: format!("Failed to create archive: {}", e),
    })?;

    if let Err(e) = write_entries(file, pack_dir, descriptor, printer) {
        let _ = fs::remove_file(&archive_path);
        return Err(e);
    }

    Ok(archive_path)
}

fn write_entries(
    file: File,
    pack_dir: &Path,
    descriptor: &PackDescriptor,
    printer: &Printer,
) -> Result<()> {
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file(PACK_FILENAME, options)?;
    zip.write_all(descriptor.to_json_pretty()?.as_bytes())?;
    printer.status("Adding", PACK_FILENAME);

    let tokens_dir = pack_dir.join(TOKENS_DIR);
    if tokens_dir.is_dir() {
        for path in scan_directory(&tokens_dir)?.files {
            let entry_name = format!("{}/{}", TOKENS_DIR, file_name_string(&path));
            let mut source = File::open(&path).map_err(|e| GbtkError::Io {
                path: path.clone(),
                message: format!("Failed to read token file: {}", e),
            })?;

            zip.start_file(entry_name.as_str(), options)?;
            io::copy(&mut source, &mut zip)?;
            printer.status("Adding", &entry_name);
        }
    } else {
        printer.warning(
            "Warning",
            &format!(
                "'{}' directory not found; the archive will not contain any tokens",
                TOKENS_DIR
            ),
        );
    }

    zip.finish()?;
    Ok(())
}
