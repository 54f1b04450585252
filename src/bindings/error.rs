//! Extraction-specific error types.

use std::path::PathBuf;

/// Reasons live extraction of Hyprland bindings can fail.
///
/// These never leave the loader: every variant results in the fallback
/// table being used and the error being logged.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Configuration file is missing or could not be read
    #[error("Failed to read {path}: {source}")]
    FileUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// No home directory and no explicit path to read from
    #[error("No Hyprland configuration path available")]
    NoPath,

    /// Configuration was read but contained no bind statements
    #[error("No bind statements found in {path}")]
    ParseMismatch { path: PathBuf },

    /// A bind statement is missing one of its fields
    #[error("Malformed bind statement: {statement}")]
    MalformedBind { statement: String },

    /// Bind pattern failed to compile
    #[error("Invalid bind pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_display() {
        let error = ExtractError::FileUnavailable {
            path: PathBuf::from("/test/hyprland.conf"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "Not found"),
        };
        assert!(error.to_string().contains("/test/hyprland.conf"));
        assert!(error.to_string().contains("Not found"));

        let error = ExtractError::ParseMismatch {
            path: PathBuf::from("/test/hyprland.conf"),
        };
        assert!(error.to_string().contains("No bind statements"));

        let error = ExtractError::MalformedBind {
            statement: "bind = SUPER, Q".to_string(),
        };
        assert!(error.to_string().contains("bind = SUPER, Q"));

        let error = ExtractError::NoPath;
        assert!(error.to_string().contains("path"));
    }
}
