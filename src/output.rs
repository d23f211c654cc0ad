//! Terminal output for the gbtk CLI.
//!
//! Every progress line, warning and validation error is written to stderr
//! in a Cargo-like layout: a right-aligned verb, then the message. Stdout
//! carries only the usage text.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// How a status line should read at a glance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Work done or checks passed (green).
    Progress,
    /// Neutral narration such as files found (cyan).
    Note,
    /// Something odd that does not stop the run (yellow).
    Warn,
    /// A failed check or verdict (red).
    Fail,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Progress => "\x1b[32m",
            Tone::Note => CYAN,
            Tone::Warn => "\x1b[33m",
            Tone::Fail => "\x1b[31m",
        }
    }
}

/// Status printer for pack creation and validation.
///
/// Colour is on only when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self::with_color(io::stderr().is_terminal())
    }

    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    /// Print one verb/message line.
    pub fn line(&self, tone: Tone, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{}", self.format_line(tone, verb, message));
    }

    /// e.g. "      Adding tokens/goblin.png"
    pub fn status(&self, verb: &str, message: &str) {
        self.line(Tone::Progress, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.line(Tone::Note, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.line(Tone::Warn, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.line(Tone::Fail, verb, message);
    }

    /// Print a bullet under the verb column, used for validation errors.
    pub fn item(&self, message: &str) {
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{:>VERB_WIDTH$} - {message}", "");
    }

    /// A path for display, relative to the working directory when possible.
    pub fn path(&self, path: &Path) -> String {
        let shown = display_path(path);
        if self.color {
            format!("{CYAN}{shown}{RESET}")
        } else {
            shown
        }
    }

    fn format_line(&self, tone: Tone, verb: &str, message: &str) -> String {
        if self.color {
            format!("{BOLD}{}{verb:>VERB_WIDTH$}{RESET} {message}", tone.ansi())
        } else {
            format!("{verb:>VERB_WIDTH$} {message}")
        }
    }
}

/// Pluralize a count: `plural(1, "token", "tokens")` → "1 token".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    let word = if n == 1 { singular } else { pluralized };
    format!("{n} {word}")
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}
