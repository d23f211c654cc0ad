//! Structured validation results.

use std::fmt;

use serde_json::Value;

use crate::descriptor::{PACK_FILENAME, TOKENS_DIR};

/// JSON value kinds, used to name expected and found types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonType {
    /// Classify a JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonType::Null,
            Value::Bool(_) => JsonType::Boolean,
            Value::Number(_) => JsonType::Number,
            Value::String(_) => JsonType::String,
            Value::Array(_) => JsonType::Array,
            Value::Object(_) => JsonType::Object,
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonType::Null => "null",
            JsonType::Boolean => "boolean",
            JsonType::Number => "number",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        };
        f.write_str(name)
    }
}

/// Where referenced token files were looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Directory,
    Archive,
}

/// A single schema or content problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The document is not a JSON object at all.
    NotAnObject { found: JsonType },
    /// A required top-level key is absent.
    MissingKey { key: &'static str },
    /// A required top-level key has the wrong type.
    WrongType {
        key: &'static str,
        expected: JsonType,
        found: JsonType,
    },
    /// A `tokens` element is not an object.
    TokenNotObject { index: usize },
    /// A token entry field is absent or not a string.
    TokenField { index: usize, field: &'static str },
    /// A referenced token file could not be found.
    MissingFile { file_name: String, location: Location },
}

impl ValidationError {
    /// Whether this error concerns the top-level shape of the document.
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            ValidationError::NotAnObject { .. }
                | ValidationError::MissingKey { .. }
                | ValidationError::WrongType { .. }
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotAnObject { found } => {
                write!(f, "{PACK_FILENAME} must contain a JSON object, found {found}.")
            }
            ValidationError::MissingKey { key } => write!(f, "Missing required key: '{key}'"),
            ValidationError::WrongType {
                key,
                expected,
                found,
            } => write!(
                f,
                "Key '{key}' has incorrect type. Expected {expected}, found {found}."
            ),
            ValidationError::TokenNotObject { index } => {
                write!(f, "Token entry at index {index} is not a valid object.")
            }
            ValidationError::TokenField { index, field } => write!(
                f,
                "Token entry at index {index} is missing a valid '{field}' string."
            ),
            ValidationError::MissingFile {
                file_name,
                location: Location::Directory,
            } => write!(
                f,
                "Token file '{file_name}' listed in {PACK_FILENAME} does not exist in the '{TOKENS_DIR}' directory."
            ),
            ValidationError::MissingFile {
                file_name,
                location: Location::Archive,
            } => write!(
                f,
                "Token file '{file_name}' listed in {PACK_FILENAME} does not exist in the archive's '{TOKENS_DIR}/' directory."
            ),
        }
    }
}

/// Outcome of validating one descriptor.
///
/// Holds every error found (never just the first) plus the token files
/// that were confirmed present, for progress narration.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
    found: Vec<String>,
    token_count: usize,
    location: Option<Location>,
}

impl ValidationReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_location(location: Option<Location>) -> Self {
        Self {
            location,
            ..Self::default()
        }
    }

    /// Record an error.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub(crate) fn confirm(&mut self, file_name: impl Into<String>) {
        self.found.push(file_name.into());
    }

    pub(crate) fn set_token_count(&mut self, count: usize) {
        self.token_count = count;
    }

    /// Overall verdict: true iff no errors were recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Count errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over errors in the order they were found.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// Token files confirmed present, in descriptor order.
    pub fn found(&self) -> &[String] {
        &self.found
    }

    /// Number of elements in the `tokens` list (0 if it was unusable).
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// Where token files were looked up, if anywhere.
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// True when no top-level key is missing or mistyped.
    pub fn schema_ok(&self) -> bool {
        !self.errors.iter().any(ValidationError::is_schema_error)
    }

    /// True when the token list is non-empty and every entry checked out.
    pub fn all_tokens_found(&self) -> bool {
        self.token_count > 0 && self.errors.iter().all(ValidationError::is_schema_error)
    }

    /// Error messages as display strings.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}
