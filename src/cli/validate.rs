//! Validate command implementation.
//!
//! Opens a `.gbtk` archive and checks its `pack.json` against the entries
//! actually present. Schema problems are reported, not returned as errors.

use std::path::Path;

use crate::archive::open_archive;
use crate::descriptor::{PACK_FILENAME, TOKENS_DIR};
use crate::error::Result;
use crate::output::Printer;
use crate::validation::{print_report, validate_descriptor, TokenSource, ValidationReport};

/// Validate the archive at `path` and return the report.
pub fn run(path: &Path, printer: &Printer) -> Result<ValidationReport> {
    printer.status("Validating", &printer.path(path));

    let archive = open_archive(path)?;
    printer.status("Found", &format!("'{}' at the root", PACK_FILENAME));

    if archive.has_tokens_dir() {
        printer.status("Found", &format!("'{}/' directory", TOKENS_DIR));
    } else {
        printer.warning(
            "Warning",
            &format!("the archive does not contain a '{}/' directory", TOKENS_DIR),
        );
    }

    let report = validate_descriptor(archive.document(), TokenSource::Archive(archive.entries()));
    print_report(&report, printer);

    if report.is_valid() {
        printer.status("Complete", "the token pack appears to be valid");
    } else {
        printer.error("Complete", "the token pack has issues (see errors above)");
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GbtkError;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn write_zip(path: &Path, entries: &[(&str, &str)]) {
        let mut zip = ZipWriter::new(File::create(path).unwrap());
        for (name, content) in entries {
            zip.start_file(*name, SimpleFileOptions::default()).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }

    #[test]
    fn test_schema_errors_are_reported_not_returned() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial.gbtk");
        write_zip(
            &path,
            &[
                (
                    "pack.json",
                    r#"{"name": "Goblins", "version": 1, "tokens": [{"name": "Orc", "fileName": "orc.png"}]}"#,
                ),
                ("tokens/goblin.png", "png"),
            ],
        );

        let report = run(&path, &Printer::new()).unwrap();

        assert!(!report.is_valid());
        assert_eq!(
            report.messages(),
            vec![
                "Missing required key: 'author'",
                "Missing required key: 'description'",
                "Key 'version' has incorrect type. Expected string, found number.",
                "Token file 'orc.png' listed in pack.json does not exist in the archive's 'tokens/' directory.",
            ]
        );
    }

    #[test]
    fn test_missing_pack_json_halts() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nopack.gbtk");
        write_zip(&path, &[("tokens/goblin.png", "png")]);

        let result = run(&path, &Printer::new());

        assert!(matches!(result, Err(GbtkError::Archive { .. })));
    }

    #[test]
    fn test_not_a_zip_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fake.gbtk");
        fs::write(&path, "hello").unwrap();

        assert!(run(&path, &Printer::new()).is_err());
    }
}
