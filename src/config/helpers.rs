use std::path::{Path, PathBuf};

use crate::value::Value;

/// Expand a leading `~/` against the user's home directory. Relative and
/// absolute paths pass through untouched; when no home directory can be
/// determined the raw path is used as-is.
pub(super) fn resolve_config_path(path: &Path) -> PathBuf {
    if let Some(raw) = path.to_str() {
        if let Some(rest) = raw.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
    }
    path.to_path_buf()
}

/// A platform or test suite is enabled unless it carries an explicit
/// `enabled` field that coerced to `false`; an absent field defaults to
/// enabled.
pub(super) fn is_enabled(entry: &Value) -> bool {
    match entry.as_map().and_then(|fields| fields.get("enabled")) {
        Some(Value::Bool(false)) => false,
        _ => true,
    }
}
