use std::fmt;

/// The error type for configuration loading.
///
/// Only I/O-level failures are errors: structural oddities in the source
/// are resolved by best-effort placement during parsing, and a missing
/// query path is an `Option::None`, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum HarnessError {
    /// The configuration file does not exist.
    ConfigNotFound {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// The configuration file exists but could not be read.
    ConfigUnreadable {
        path: String,
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::ConfigNotFound { path, hint, code } =>
                write!(f, "Configuration file not found: {}{}{}",
                    path,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            HarnessError::ConfigUnreadable { path, message, hint, code } =>
                write!(f, "Failed to read configuration file '{}': {}{}{}",
                    path, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
        }
    }
}

impl std::error::Error for HarnessError {}

impl HarnessError {
    /// A missing-file error with the consistent default hint and code.
    pub fn not_found(path: String) -> Self {
        HarnessError::ConfigNotFound {
            path,
            hint: Some("Check that the file exists and the path is spelled correctly".into()),
            code: Some(301),
        }
    }

    /// A present-but-unreadable error (permissions, encoding, I/O).
    pub fn unreadable(path: String, message: String) -> Self {
        HarnessError::ConfigUnreadable {
            path,
            message,
            hint: Some("Check file permissions and encoding".into()),
            code: Some(302),
        }
    }
}
