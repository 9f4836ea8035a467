use std::path::PathBuf;
use thiserror::Error;

/// Main error type for restyle
#[derive(Error, Debug)]
pub enum FixupError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid configuration in {}: {message}", .path.display())]
    Config { message: String, path: PathBuf },

    #[error("Invalid rule '{rule}': {message}")]
    InvalidRule { rule: String, message: String },

    #[error("Rule '{rule}' has an invalid pattern: {source}")]
    Regex {
        rule: String,
        source: regex::Error,
    },

    #[error("{} rule(s) matched nothing: {}", .rules.len(), .rules.join(", "))]
    UnmatchedRules { rules: Vec<String> },
}

impl FixupError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source: err,
            path: path.into(),
        }
    }

    /// Create a new configuration error
    pub fn config_error(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Create a new invalid rule error
    pub fn invalid_rule(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRule {
            rule: rule.into(),
            message: message.into(),
        }
    }

    /// Returns the path involved in the error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } | Self::Config { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Result type for restyle operations
pub type Result<T> = std::result::Result<T, FixupError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_mentions_path() {
        let err = FixupError::io_error(
            io::Error::new(io::ErrorKind::NotFound, "missing"),
            "src/App.tsx",
        );
        let message = err.to_string();
        assert!(message.contains("src/App.tsx"));
        assert!(message.contains("missing"));
        assert_eq!(err.path(), Some(&PathBuf::from("src/App.tsx")));
    }

    #[test]
    fn test_unmatched_rules_lists_names() {
        let err = FixupError::UnmatchedRules {
            rules: vec!["canvas-surface".to_string(), "grid-dots".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "2 rule(s) matched nothing: canvas-surface, grid-dots"
        );
        assert!(err.path().is_none());
    }
}
