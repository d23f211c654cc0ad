//! Create command implementation.
//!
//! Loads or interactively builds a pack descriptor, validates it against
//! the pack's `tokens` directory, and writes the `.gbtk` archive.

use std::path::{Path, PathBuf};

use crate::archive::write_archive;
use crate::builder::build_interactively;
use crate::descriptor::{load_document, PackDescriptor, PACK_FILENAME, TOKENS_DIR};
use crate::error::{GbtkError, Result};
use crate::output::{display_path, Printer};
use crate::prompt::Prompter;
use crate::validation::{print_report, validate_descriptor, TokenSource};

/// Package `pack_dir`, returning the path of the written archive.
pub fn run(pack_dir: &Path, printer: &Printer, prompter: &mut dyn Prompter) -> Result<PathBuf> {
    if !pack_dir.is_dir() {
        return Err(GbtkError::NotFound {
            message: format!("The directory '{}' does not exist", display_path(pack_dir)),
            help: None,
        });
    }

    let tokens_dir = pack_dir.join(TOKENS_DIR);
    if !tokens_dir.is_dir() {
        return Err(GbtkError::NotFound {
            message: format!(
                "A '{}' sub-directory must exist inside '{}'",
                TOKENS_DIR,
                display_path(pack_dir)
            ),
            help: Some("Put the token images in a 'tokens' folder inside the pack".to_string()),
        });
    }

    let pack_json = pack_dir.join(PACK_FILENAME);
    let document = if pack_json.exists() {
        printer.info("Reading", &display_path(&pack_json));
        load_document(&pack_json)?
    } else {
        printer.info(
            "Building",
            &format!("no '{}' found, creating one interactively", PACK_FILENAME),
        );
        build_interactively(pack_dir, prompter, printer)?.to_value()?
    };

    printer.status("Validating", PACK_FILENAME);
    let report = validate_descriptor(&document, TokenSource::Directory(&tokens_dir));
    print_report(&report, printer);

    if !report.is_valid() {
        return Err(GbtkError::Validation {
            message: "aborted due to validation errors".to_string(),
            help: Some(format!(
                "Fix the errors listed above in {} and run again",
                PACK_FILENAME
            )),
        });
    }

    let descriptor = PackDescriptor::from_value(document)?;
    let archive_path = write_archive(pack_dir, &descriptor, printer)?;
    printer.status("Created", &printer.path(&archive_path));

    Ok(archive_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::LinePrompter;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn no_answers() -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(Cursor::new(Vec::new()), Vec::new())
    }

    fn make_pack(root: &Path, pack_json: Option<&str>) -> PathBuf {
        let pack_dir = root.join("goblins");
        fs::create_dir_all(pack_dir.join("tokens")).unwrap();
        fs::write(pack_dir.join("tokens/goblin.png"), [0u8; 4]).unwrap();
        if let Some(json) = pack_json {
            fs::write(pack_dir.join("pack.json"), json).unwrap();
        }
        pack_dir
    }

    const VALID: &str = r#"{
        "name": "Goblin Horde",
        "author": "Ada",
        "description": "Small green menaces",
        "version": "1.0.0",
        "tokens": [{"name": "Goblin", "fileName": "goblin.png"}]
    }"#;

    #[test]
    fn test_creates_archive_from_existing_pack_json() {
        let root = tempdir().unwrap();
        let pack_dir = make_pack(root.path(), Some(VALID));

        let path = run(&pack_dir, &Printer::new(), &mut no_answers()).unwrap();

        assert!(path.exists());
        assert!(path.ends_with("goblin_horde.gbtk"));
    }

    #[test]
    fn test_missing_token_file_aborts_without_archive() {
        let root = tempdir().unwrap();
        let missing = VALID.replace("goblin.png", "orc.png");
        let pack_dir = make_pack(root.path(), Some(missing.as_str()));

        let result = run(&pack_dir, &Printer::new(), &mut no_answers());

        assert!(matches!(result, Err(GbtkError::Validation { .. })));
        assert!(!root.path().join("goblin_horde.gbtk").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_unlistable_tokens_fail_after_validation() {
        let root = tempdir().unwrap();
        let pack_dir = make_pack(root.path(), Some(VALID));
        std::os::unix::fs::symlink(
            pack_dir.join("tokens/nowhere.png"),
            pack_dir.join("tokens/orc.png"),
        )
        .unwrap();

        let result = run(&pack_dir, &Printer::new(), &mut no_answers());

        assert!(matches!(result, Err(GbtkError::Io { .. })));
        assert!(!root.path().join("goblin_horde.gbtk").exists());
    }

    #[test]
    fn test_malformed_pack_json_is_fatal() {
        let root = tempdir().unwrap();
        let pack_dir = make_pack(root.path(), Some("{ \"name\": "));

        let result = run(&pack_dir, &Printer::new(), &mut no_answers());

        assert!(matches!(result, Err(GbtkError::Parse { .. })));
    }

    #[test]
    fn test_missing_directory() {
        let root = tempdir().unwrap();

        let result = run(&root.path().join("absent"), &Printer::new(), &mut no_answers());

        assert!(matches!(result, Err(GbtkError::NotFound { .. })));
    }

    #[test]
    fn test_missing_tokens_dir() {
        let root = tempdir().unwrap();
        let pack_dir = root.path().join("empty");
        fs::create_dir_all(&pack_dir).unwrap();
        fs::write(pack_dir.join("pack.json"), VALID).unwrap();

        let result = run(&pack_dir, &Printer::new(), &mut no_answers());

        assert!(matches!(result, Err(GbtkError::NotFound { .. })));
    }

    #[test]
    fn test_builds_interactively_when_no_pack_json() {
        let root = tempdir().unwrap();
        let pack_dir = make_pack(root.path(), None);
        let answers = "My Cool Pack!!\nAda\nGoblins\n\n\n";
        let mut prompter = LinePrompter::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new());

        let path = run(&pack_dir, &Printer::new(), &mut prompter).unwrap();

        assert!(path.ends_with("my_cool_pack.gbtk"));
        let written = String::from_utf8(prompter.into_writer()).unwrap();
        assert!(written.contains("Enter a name for 'goblin.png' [Goblin]: "));
        assert!(!pack_dir.join("pack.json").exists());
    }
}
