//! Token file discovery for pack directories.
//!
//! Lists the files sitting directly inside a pack's `tokens` directory,
//! picks out the image files the interactive builder offers for naming,
//! and derives a default display name for each.
//!
//! # Example
//!
//! ```ignore
//! use gbtk::discovery::scan_directory;
//!
//! let scan = scan_directory(Path::new("./goblins/tokens"))?;
//! for image in scan.images() {
//!     println!("{}", default_display_name(image));
//! }
//! ```

mod naming;
mod scanner;

pub use naming::{default_display_name, file_name_string};
pub use scanner::{is_token_image, scan_directory, ScanResult, IMAGE_EXTENSIONS};
