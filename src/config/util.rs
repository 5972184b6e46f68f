//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Extract the path component of a URL, without surrounding slashes.
///
/// Returns `None` if the URL is invalid.
///
/// # Examples
/// ```ignore
/// extract_url_path("https://example.github.io/my-blog/") -> Some("my-blog")
/// extract_url_path("https://example.com:8080/a/b")       -> Some("a/b")
/// extract_url_path("https://example.com")                -> Some("")
/// extract_url_path("invalid")                            -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    Some(parsed.path().trim_matches('/').to_string())
}

/// Normalize a base path prefix to `/segment/.../` form.
///
/// Empty input (or only slashes) yields `/`.
pub fn normalize_base(base: &str) -> String {
    let segments: Vec<_> = base.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", segments.join("/"))
    }
}

/// Find config file by searching upward from `start`.
///
/// An absolute `config_name` is returned as-is when it exists.
///
/// # Example
/// ```text
/// /home/user/blog/src/pages/posts/  ← start
/// /home/user/blog/enigma.toml       ← found
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

// ============================================================================
// tests
// ============================================================================
