use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::HarnessError;
use crate::parser::{self, ParseWarning};
use crate::value::Value;

mod access;
mod helpers;
mod validation;

/// A parsed harness configuration.
///
/// Holds the root mapping produced by one parse call. The tree is immutable
/// from the caller's perspective: queries and validation read it, nothing
/// mutates it after construction. Lines the reader could not place are
/// retained as warnings for callers that want to surface them.
pub struct HarnessConfig {
    root: Value,
    warnings: Vec<ParseWarning>,
}

impl HarnessConfig {
    /// Load a configuration file.
    ///
    /// A leading `~/` in the path is expanded against the home directory.
    /// The whole file is read into memory before parsing; the only
    /// failures are I/O-level (missing or unreadable file), reported once
    /// and never retried.
    ///
    /// # Example
    /// ```ignore
    /// let config = HarnessConfig::from_file("docker-tests.yaml")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, HarnessError> {
        let resolved = helpers::resolve_config_path(path.as_ref());
        let content = fs::read_to_string(&resolved).map_err(|e| {
            let shown = resolved.to_string_lossy().to_string();
            if e.kind() == ErrorKind::NotFound {
                HarnessError::not_found(shown)
            } else {
                HarnessError::unreadable(shown, e.to_string())
            }
        })?;
        Ok(Self::from_str(&content))
    }

    /// Load from `primary`, falling back to `fallback` when the primary
    /// file is not found. When both are missing, the composed error names
    /// both paths.
    pub fn from_file_with_fallback<P: AsRef<Path>>(
        primary: P,
        fallback: P,
    ) -> Result<Self, HarnessError> {
        match Self::from_file(&primary) {
            Ok(config) => Ok(config),
            Err(HarnessError::ConfigNotFound { .. }) => {
                Self::from_file(&fallback).map_err(|e| match e {
                    HarnessError::ConfigNotFound { code, .. } => HarnessError::ConfigNotFound {
                        path: format!(
                            "{} (fallback: {})",
                            primary.as_ref().display(),
                            fallback.as_ref().display()
                        ),
                        hint: Some("Check that at least one of the config files exists".into()),
                        code,
                    },
                    other => other,
                })
            }
            Err(other) => Err(other),
        }
    }

    /// Parse from in-memory text, no file I/O.
    ///
    /// Never fails: structurally unplaceable lines are dropped from the
    /// tree and recorded in [`HarnessConfig::warnings`].
    pub fn from_str(content: &str) -> Self {
        let (root, warnings) = parser::parse_document(content);
        Self {
            root: Value::Map(root),
            warnings,
        }
    }

    /// The root mapping of the parsed document.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Lines the reader dropped, in source order.
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }
}
