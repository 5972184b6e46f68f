//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "src/pages/posts"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Where content documents live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Markdown content directory (relative to the config file).
    pub content: PathBuf,
}

/// Field paths of [`BuildConfig`] for diagnostics.
pub struct BuildFields {
    pub content: FieldPath,
}

impl BuildConfig {
    pub const FIELDS: BuildFields = BuildFields {
        content: FieldPath::new("build.content"),
    };

    /// Validate build configuration (after path normalization).
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.content.exists() {
            diag.warn(
                Self::FIELDS.content,
                format!("content directory not found: {}", self.content.display()),
            );
        } else if !self.content.is_dir() {
            diag.error(
                Self::FIELDS.content,
                format!("not a directory: {}", self.content.display()),
            );
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content: "src/pages/posts".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_default_content_dir() {
        let config = test_parse_config("");
        assert_eq!(config.build.content, PathBuf::from("src/pages/posts"));
    }

    #[test]
    fn test_content_is_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let build = BuildConfig {
            content: file.path().to_path_buf(),
        };
        let mut diag = ConfigDiagnostics::new();
        build.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_missing_content_is_warning() {
        let build = BuildConfig {
            content: PathBuf::from("/no/such/content"),
        };
        let mut diag = ConfigDiagnostics::new();
        build.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
