//! Serialization of match results to JSON and YAML.
//!
//! The grammar table's output side (token, found flag, bound values) is the
//! interesting part after a scan; this module projects it into a plain
//! serializable view so callers can dump results for tooling or logging.
//! Deserialization is deliberately absent: bindings are output locations,
//! not inputs.

use std::fmt;

use serde::Serialize;

use crate::grammar::GrammarTable;

/// Error that can occur during formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Serializable projection of one entry's output side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundEntry<'a> {
    pub token: &'a str,
    pub found: bool,
    pub values: Vec<&'a str>,
}

/// Project the table's output side into serializable rows, in table order.
pub fn bound_entries(table: &GrammarTable) -> Vec<BoundEntry<'_>> {
    table
        .iter()
        .map(|entry| BoundEntry {
            token: entry.token.as_str(),
            found: entry.found,
            values: entry.binding.values().iter().map(|v| v.as_str()).collect(),
        })
        .collect()
}

/// Serialize the table's output side as pretty-printed JSON.
pub fn to_json(table: &GrammarTable) -> Result<String, FormatError> {
    serde_json::to_string_pretty(&bound_entries(table))
        .map_err(|e| FormatError::SerializationError(e.to_string()))
}

/// Serialize the table's output side as YAML.
pub fn to_yaml(table: &GrammarTable) -> Result<String, FormatError> {
    serde_yaml::to_string(&bound_entries(table))
        .map_err(|e| FormatError::SerializationError(e.to_string()))
}
