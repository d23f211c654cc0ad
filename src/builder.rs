//! Interactive descriptor builder.
//!
//! Used when a pack directory has no `pack.json` yet: asks for the pack
//! metadata, then for a display name for each image in `tokens/`.

use std::path::Path;

use crate::descriptor::{PackDescriptor, TokenEntry, DEFAULT_VERSION, TOKENS_DIR};
use crate::discovery::{default_display_name, file_name_string, scan_directory};
use crate::error::{GbtkError, Result};
use crate::output::{display_path, plural, Printer};
use crate::prompt::Prompter;

/// Build a descriptor for `pack_dir` by asking questions.
///
/// Fails if `pack_dir` has no `tokens` subdirectory. An empty (or image-less)
/// tokens directory produces a descriptor with no tokens and a warning.
pub fn build_interactively(
    pack_dir: &Path,
    prompter: &mut dyn Prompter,
    printer: &Printer,
) -> Result<PackDescriptor> {
    let tokens_dir = pack_dir.join(TOKENS_DIR);
    if !tokens_dir.is_dir() {
        return Err(GbtkError::NotFound {
            message: format!(
                "A '{}' sub-directory was not found in '{}'",
                TOKENS_DIR,
                display_path(pack_dir)
            ),
            help: Some("Put the token images in a 'tokens' folder inside the pack".to_string()),
        });
    }

    let mut descriptor = PackDescriptor {
        name: prompter.ask("Enter the pack name", None)?,
        author: prompter.ask("Enter the author's name", None)?,
        description: prompter.ask("Enter a brief description", None)?,
        version: prompter.ask("Enter a version number", Some(DEFAULT_VERSION))?,
        tokens: Vec::new(),
    };

    let scan = scan_directory(&tokens_dir)?;
    let images: Vec<_> = scan.images().collect();

    if images.is_empty() {
        printer.warning(
            "Warning",
            &format!("no token images found in '{}'", display_path(&tokens_dir)),
        );
        return Ok(descriptor);
    }

    printer.info(
        "Naming",
        &plural(images.len(), "token image", "token images"),
    );

    for image in images {
        let file_name = file_name_string(image);
        let default_name = default_display_name(image);
        let name = prompter.ask(
            &format!("Enter a name for '{file_name}'"),
            Some(default_name.as_str()),
        )?;

        descriptor.tokens.push(TokenEntry::new(name, file_name));
    }

    Ok(descriptor)
}
