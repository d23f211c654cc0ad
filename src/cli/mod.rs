pub mod create;
pub mod validate;

use std::path::{Path, PathBuf};

use clap::{ArgGroup, Parser};

/// gbtk - Token pack packager and validator
///
/// Only two shapes are accepted; help and version flags are disabled so
/// that anything else falls through to [`usage`].
#[derive(Parser, Debug)]
#[command(name = "gbtk")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(group(ArgGroup::new("mode").required(true).args(["directory", "validate"])))]
pub struct Cli {
    /// Pack directory to package (must contain a tokens/ subdirectory)
    #[arg(allow_hyphen_values = true)]
    pub directory: Option<PathBuf>,

    /// Validate an existing .gbtk archive instead of creating one
    #[arg(long, value_name = "FILE")]
    pub validate: Option<PathBuf>,
}

/// What a parsed command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Package a directory into an archive.
    Create(PathBuf),
    /// Validate an existing archive.
    Validate(PathBuf),
}

impl Cli {
    /// Resolve the invocation mode, if the arguments name one.
    ///
    /// A directory argument spelled like a long flag (`--help`) is only
    /// taken as a directory when one by that name exists.
    pub fn into_mode(self) -> Option<Mode> {
        match (self.directory, self.validate) {
            (None, Some(file)) => Some(Mode::Validate(file)),
            (Some(dir), None) if !looks_like_long_flag(&dir) || dir.is_dir() => {
                Some(Mode::Create(dir))
            }
            _ => None,
        }
    }
}

fn looks_like_long_flag(path: &Path) -> bool {
    path.to_str().is_some_and(|s| s.starts_with("--"))
}

/// Usage text printed for any malformed invocation.
pub fn usage() -> &'static str {
    "Usage:\n  Create: gbtk <directory_path>\n  Validate: gbtk --validate <file_path.gbtk>\n"
}
