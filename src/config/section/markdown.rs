//! `[markdown]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [markdown]
//! default_layout = "../../layouts/PostLayout.astro"
//! transforms = ["layout"]
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::pipeline::{DEFAULT_LAYOUT, TransformKind};

/// Frontmatter processing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Layout injected into documents that do not set one.
    pub default_layout: String,

    /// Transforms run on every document, in order.
    pub transforms: Vec<TransformKind>,
}

/// Field paths of [`MarkdownConfig`] for diagnostics.
pub struct MarkdownFields {
    pub default_layout: FieldPath,
    pub transforms: FieldPath,
}

impl MarkdownConfig {
    pub const FIELDS: MarkdownFields = MarkdownFields {
        default_layout: FieldPath::new("markdown.default_layout"),
        transforms: FieldPath::new("markdown.transforms"),
    };

    /// Validate markdown configuration.
    ///
    /// # Checks
    /// - `default_layout` must not be blank when `layout` is registered
    /// - each transform should be registered once
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.transforms.contains(&TransformKind::Layout) && self.default_layout.trim().is_empty()
        {
            diag.error_with_hint(
                Self::FIELDS.default_layout,
                "must not be empty",
                format!("e.g.: \"{DEFAULT_LAYOUT}\""),
            );
        }

        let mut seen = FxHashSet::default();
        for kind in &self.transforms {
            if !seen.insert(kind) {
                diag.warn(
                    Self::FIELDS.transforms,
                    format!("`{}` is registered more than once", kind.as_str()),
                );
            }
        }
    }
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            default_layout: DEFAULT_LAYOUT.into(),
            transforms: vec![TransformKind::Layout],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.markdown.default_layout, "../../layouts/PostLayout.astro");
        assert_eq!(config.markdown.transforms, vec![TransformKind::Layout]);
    }

    #[test]
    fn test_custom_layout() {
        let config = test_parse_config("[markdown]\ndefault_layout = \"../layouts/Note.astro\"");
        assert_eq!(config.markdown.default_layout, "../layouts/Note.astro");
    }

    #[test]
    fn test_blank_layout_rejected() {
        let markdown = MarkdownConfig {
            default_layout: "  ".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        markdown.validate(&mut diag);
        assert_eq!(diag.errors()[0].field, MarkdownConfig::FIELDS.default_layout);
    }

    #[test]
    fn test_blank_layout_allowed_without_transform() {
        let markdown = MarkdownConfig {
            default_layout: String::new(),
            transforms: Vec::new(),
        };
        let mut diag = ConfigDiagnostics::new();
        markdown.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_duplicate_transform_warns() {
        let markdown = MarkdownConfig {
            transforms: vec![TransformKind::Layout, TransformKind::Layout],
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        markdown.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
