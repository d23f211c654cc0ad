//! `.gbtk` archive writing and reading.
//!
//! An archive is a deflate-compressed ZIP holding `pack.json` at the root
//! and the pack's token files under `tokens/`.

mod reader;
mod writer;

pub use reader::{open_archive, PackArchive};
pub use writer::{archive_file_stem, archive_path_for, write_archive, ARCHIVE_EXTENSION};
