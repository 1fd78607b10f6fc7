//! Structured output
//!
//! Serializes a built page set as `{"pages": [...]}` for JSON or YAML consumers.

use crate::error::Result;
use crate::pagination::PageSet;

/// Compact single-line JSON
pub fn to_json(pages: &PageSet) -> Result<String> {
    Ok(serde_json::to_string(pages)?)
}

/// Two-space indented JSON
pub fn to_json_pretty(pages: &PageSet) -> Result<String> {
    Ok(serde_json::to_string_pretty(pages)?)
}

pub fn to_yaml(pages: &PageSet) -> Result<String> {
    Ok(serde_yaml::to_string(pages)?)
}
