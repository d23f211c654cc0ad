//! Validation of pack descriptors.
//!
//! Checks the shape of a `pack.json` document and, optionally, that every
//! referenced token file exists. Used by both create mode (against the
//! source directory) and validate mode (against archive entry names).
//! The checks are pure; [`print_report`] is the presentation layer.

mod checks;
mod report;

pub use checks::REQUIRED_KEYS;
pub use report::{JsonType, Location, ValidationError, ValidationReport};

use std::path::Path;

use serde_json::Value;

use crate::output::{plural, Printer};

/// Where to resolve each token's `fileName`.
#[derive(Debug, Clone, Copy)]
pub enum TokenSource<'a> {
    /// A filesystem `tokens` directory.
    Directory(&'a Path),
    /// Entry names of an archive; files must appear under `tokens/`.
    Archive(&'a [String]),
    /// Skip existence checks entirely.
    Unchecked,
}

impl TokenSource<'_> {
    fn location(&self) -> Option<Location> {
        match self {
            TokenSource::Directory(_) => Some(Location::Directory),
            TokenSource::Archive(_) => Some(Location::Archive),
            TokenSource::Unchecked => None,
        }
    }
}

/// Run all validation checks against a descriptor document.
pub fn validate_descriptor(doc: &Value, source: TokenSource<'_>) -> ValidationReport {
    let mut report = ValidationReport::with_location(source.location());

    let Some(object) = doc.as_object() else {
        report.push(ValidationError::NotAnObject {
            found: JsonType::of(doc),
        });
        return report;
    };

    checks::check_required_keys(object, &mut report);

    if let Some(tokens) = object.get("tokens").and_then(Value::as_array) {
        checks::check_token_entries(tokens, &source, &mut report);
    }

    report
}

/// Print a report to stderr.
pub fn print_report(report: &ValidationReport, printer: &Printer) {
    if report.schema_ok() {
        printer.status("Checked", "schema and data types are correct");
    }

    let suffix = match report.location() {
        Some(Location::Archive) => " in archive",
        _ => "",
    };
    for file_name in report.found() {
        printer.info("Found", &format!("token '{file_name}'{suffix}"));
    }

    if report.location().is_some() && report.all_tokens_found() {
        printer.status(
            "Found",
            &format!(
                "all token files ({})",
                plural(report.token_count(), "token", "tokens")
            ),
        );
    }

    if report.is_valid() {
        printer.status("Valid", "validation successful");
    } else {
        printer.error(
            "Failed",
            &format!(
                "validation failed with {}",
                plural(report.error_count(), "error", "errors")
            ),
        );
        for message in report.messages() {
            printer.item(&message);
        }
    }
}
