//! Validation checks for a pack descriptor document.
//!
//! Each check appends to a shared `ValidationReport` and never stops early.

use serde_json::{Map, Value};

use crate::descriptor::TOKENS_DIR;

use super::report::{JsonType, Location, ValidationError, ValidationReport};
use super::TokenSource;

/// Top-level keys every descriptor must carry, with their expected types.
pub const REQUIRED_KEYS: &[(&str, JsonType)] = &[
    ("name", JsonType::String),
    ("author", JsonType::String),
    ("description", JsonType::String),
    ("version", JsonType::String),
    ("tokens", JsonType::Array),
];

/// Check presence and type of every required top-level key.
pub fn check_required_keys(doc: &Map<String, Value>, report: &mut ValidationReport) {
    for &(key, expected) in REQUIRED_KEYS {
        match doc.get(key) {
            None => report.push(ValidationError::MissingKey { key }),
            Some(value) => {
                let found = JsonType::of(value);
                if found != expected {
                    report.push(ValidationError::WrongType {
                        key,
                        expected,
                        found,
                    });
                }
            }
        }
    }
}

/// Check every token entry and, where a source is given, that its file exists.
pub fn check_token_entries(
    tokens: &[Value],
    source: &TokenSource<'_>,
    report: &mut ValidationReport,
) {
    report.set_token_count(tokens.len());

    for (index, token) in tokens.iter().enumerate() {
        let Some(entry) = token.as_object() else {
            report.push(ValidationError::TokenNotObject { index });
            continue;
        };

        if !entry.get("name").is_some_and(Value::is_string) {
            report.push(ValidationError::TokenField {
                index,
                field: "name",
            });
        }

        match entry.get("fileName").and_then(Value::as_str) {
            Some(file_name) => check_token_file(file_name, source, report),
            None => report.push(ValidationError::TokenField {
                index,
                field: "fileName",
            }),
        }
    }
}

fn check_token_file(file_name: &str, source: &TokenSource<'_>, report: &mut ValidationReport) {
    let (exists, location) = match source {
        TokenSource::Directory(dir) => (dir.join(file_name).is_file(), Location::Directory),
        TokenSource::Archive(entries) => {
            let expected = format!("{TOKENS_DIR}/{file_name}");
            (entries.iter().any(|e| *e == expected), Location::Archive)
        }
        TokenSource::Unchecked => return,
    };

    if exists {
        report.confirm(file_name);
    } else {
        report.push(ValidationError::MissingFile {
            file_name: file_name.to_string(),
            location,
        });
    }
}
