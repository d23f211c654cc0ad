//! Pack descriptor (`pack.json`) types and parsing.
//!
//! Parsing is split in two: the raw document is read into a
//! `serde_json::Value` so the validator can inspect its shape, and only a
//! document that passed validation is converted into a typed
//! [`PackDescriptor`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GbtkError, Result};

/// The name of the descriptor file, both on disk and inside an archive.
pub const PACK_FILENAME: &str = "pack.json";

/// The name of the tokens subdirectory (and archive path prefix).
pub const TOKENS_DIR: &str = "tokens";

/// Version offered when building a descriptor interactively.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Metadata describing a token pack.
///
/// Field order here is the order keys are written to `pack.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackDescriptor {
    /// Human-readable pack title.
    pub name: String,
    pub author: String,
    pub description: String,
    /// Free-form version string.
    pub version: String,
    /// Token entries in display order.
    pub tokens: Vec<TokenEntry>,
}

/// A single asset in the pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenEntry {
    /// Display label for the asset.
    pub name: String,
    /// File name inside the tokens directory.
    pub file_name: String,
}

impl TokenEntry {
    pub fn new(name: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_name: file_name.into(),
        }
    }
}

impl PackDescriptor {
    /// Convert a validated document into a typed descriptor.
    ///
    /// Unknown keys are dropped.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| GbtkError::Parse {
            message: format!("Invalid {}: {}", PACK_FILENAME, e),
            help: None,
        })
    }

    /// Convert into a JSON document for validation.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| GbtkError::Parse {
            message: format!("Failed to encode {}: {}", PACK_FILENAME, e),
            help: None,
        })
    }

    /// Serialize to the canonical `pack.json` text (two-space indent).
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| GbtkError::Parse {
            message: format!("Failed to encode {}: {}", PACK_FILENAME, e),
            help: None,
        })
    }
}

/// Read a `pack.json` file into an untyped document.
pub fn load_document(path: &Path) -> Result<Value> {
    let content = std::fs::read(path).map_err(|e| GbtkError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read {}: {}", PACK_FILENAME, e),
    })?;

    parse_document(&content)
}

/// Parse `pack.json` bytes into an untyped document.
pub fn parse_document(bytes: &[u8]) -> Result<Value> {
    serde_json::from_slice(bytes).map_err(|e| GbtkError::Parse {
        message: format!("'{}' is not a valid JSON file. {}", PACK_FILENAME, e),
        help: Some(format!("Check {} syntax", PACK_FILENAME)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    fn sample() -> PackDescriptor {
        PackDescriptor {
            name: "Goblin Horde".to_string(),
            author: "Ada".to_string(),
            description: "Small green menaces".to_string(),
            version: DEFAULT_VERSION.to_string(),
            tokens: vec![TokenEntry::new("Goblin Warrior", "Goblin_Warrior.png")],
        }
    }

    #[test]
    fn test_canonical_json() {
        let json = sample().to_json_pretty().unwrap();
        insta::assert_snapshot!(json, @r###"
        {
          "name": "Goblin Horde",
          "author": "Ada",
          "description": "Small green menaces",
          "version": "1.0.0",
          "tokens": [
            {
              "name": "Goblin Warrior",
              "fileName": "Goblin_Warrior.png"
            }
          ]
        }
        "###);
    }

    #[test]
    fn test_from_value_drops_unknown_keys() {
        let value = json!({
            "name": "Goblin Horde",
            "author": "Ada",
            "description": "Small green menaces",
            "version": "1.0.0",
            "tokens": [{"name": "Goblin Warrior", "fileName": "Goblin_Warrior.png", "size": 2}],
            "license": "CC-BY"
        });

        let descriptor = PackDescriptor::from_value(value).unwrap();
        assert_eq!(descriptor, sample());

        let rewritten = descriptor.to_value().unwrap();
        assert!(rewritten.get("license").is_none());
    }

    #[test]
    fn test_from_value_rejects_wrong_types() {
        let value = json!({
            "name": "x", "author": "y", "description": "z",
            "version": 2, "tokens": []
        });
        assert!(PackDescriptor::from_value(value).is_err());
    }

    #[test]
    fn test_parse_document_invalid_json() {
        let err = parse_document(b"{\"name\": ").unwrap_err();
        assert!(matches!(err, GbtkError::Parse { .. }));
        assert!(err.to_string().contains("not a valid JSON file"));
    }

    #[test]
    fn test_load_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PACK_FILENAME);
        fs::write(&path, sample().to_json_pretty().unwrap()).unwrap();

        let value = load_document(&path).unwrap();
        assert_eq!(value["tokens"][0]["fileName"], "Goblin_Warrior.png");
    }

    #[test]
    fn test_load_document_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_document(&dir.path().join(PACK_FILENAME)).unwrap_err();
        assert!(matches!(err, GbtkError::Io { .. }));
    }
}
