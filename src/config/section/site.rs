//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Enigma Bits"
//! author = "Alice"
//! url = "https://example.github.io/blog"
//! # base = "/blog/"   # derived from url when omitted
//! ```

use serde::{Deserialize, Serialize};

use crate::config::util::{extract_url_path, normalize_base};
use crate::config::{ConfigDiagnostics, FieldPath};

/// Site metadata shared by every page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Author name.
    pub author: String,

    /// Deployed site URL (e.g., "https://example.com").
    pub url: Option<String>,

    /// Path prefix the site is served under (e.g., "/blog/").
    pub base: Option<String>,
}

/// Field paths of [`SiteInfoConfig`] for diagnostics.
pub struct SiteInfoFields {
    pub url: FieldPath,
    pub base: FieldPath,
}

impl SiteInfoConfig {
    pub const FIELDS: SiteInfoFields = SiteInfoFields {
        url: FieldPath::new("site.url"),
        base: FieldPath::new("site.base"),
    };

    /// Path prefix pages are served under, always `/`-delimited.
    ///
    /// An explicit `base` wins; otherwise the path component of `url`;
    /// otherwise `/`.
    pub fn resolved_base(&self) -> String {
        let raw = match (&self.base, &self.url) {
            (Some(base), _) => base.clone(),
            (None, Some(url)) => extract_url_path(url).unwrap_or_default(),
            (None, None) => String::new(),
        };
        normalize_base(&raw)
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be an http(s) URL with a host
    /// - `base` must not contain `..` segments
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {e}"),
                        "use format like https://example.com",
                    );
                }
            }
        }

        if let Some(base) = &self.base
            && base.split('/').any(|segment| segment == "..")
        {
            diag.error(Self::FIELDS.base, format!("`..` is not allowed in base: {base}"));
        }

        if let (Some(base), Some(url)) = (&self.base, &self.url)
            && let Some(url_path) = extract_url_path(url)
            && !url_path.is_empty()
            && normalize_base(base) != normalize_base(&url_path)
        {
            diag.warn(
                Self::FIELDS.base,
                format!("differs from the path of {} ({url_path}), base wins", Self::FIELDS.url),
            );
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
        assert_eq!(config.site.title, "Test");
        assert!(config.site.url.is_none());
        assert_eq!(config.site.resolved_base(), "/");
    }

    #[test]
    fn test_base_derived_from_url() {
        let config = test_parse_config("url = \"https://example.github.io/blog\"");
        assert_eq!(config.site.resolved_base(), "/blog/");
    }

    #[test]
    fn test_explicit_base_wins() {
        let config = test_parse_config("url = \"https://example.com/a\"\nbase = \"b\"");
        assert_eq!(config.site.resolved_base(), "/b/");
    }

    #[test]
    fn test_validate_bad_scheme() {
        let site = SiteInfoConfig {
            url: Some("ftp://example.com".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, SiteInfoConfig::FIELDS.url);
    }

    #[test]
    fn test_validate_invalid_url() {
        let site = SiteInfoConfig {
            url: Some("not a url".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_base_parent_segment() {
        let site = SiteInfoConfig {
            base: Some("/blog/../etc".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert_eq!(diag.errors()[0].field, SiteInfoConfig::FIELDS.base);
    }

    #[test]
    fn test_validate_mismatch_is_warning_only() {
        let site = SiteInfoConfig {
            url: Some("https://example.com/a".into()),
            base: Some("/b/".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
