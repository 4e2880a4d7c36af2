use std::path::Path;

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::value::Value;

/// Render a parsed value as compact JSON.
///
/// Scalars map directly, sequences become arrays, and mappings become
/// objects with their keys in declaration order. Nulls encode as JSON
/// null.
pub fn to_json(value: &Value) -> String {
    serde_json::to_string(value).expect("a parsed value always encodes as JSON")
}

/// Render a parsed value as pretty-printed JSON.
pub fn to_json_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).expect("a parsed value always encodes as JSON")
}

/// Read, parse, and export a configuration file as pretty JSON in one
/// call.
///
/// # Errors
/// Fails only when the file is missing or unreadable.
pub fn export_config_file<P: AsRef<Path>>(path: P) -> Result<String, HarnessError> {
    let config = HarnessConfig::from_file(path)?;
    Ok(to_json_pretty(config.root()))
}
