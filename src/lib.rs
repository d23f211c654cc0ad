//! gbtk - Token pack packager and validator
//!
//! A library for packaging a directory of token images and a `pack.json`
//! descriptor into a `.gbtk` archive, and for validating such archives.

pub mod archive;
pub mod builder;
pub mod cli;
pub mod descriptor;
pub mod discovery;
pub mod error;
pub mod output;
pub mod prompt;
pub mod validation;

pub use archive::{archive_file_stem, open_archive, write_archive, PackArchive};
pub use builder::build_interactively;
pub use descriptor::{PackDescriptor, TokenEntry, PACK_FILENAME, TOKENS_DIR};
pub use error::{GbtkError, Result};
pub use prompt::{LinePrompter, Prompter, TerminalPrompter};
pub use validation::{validate_descriptor, TokenSource, ValidationError, ValidationReport};
