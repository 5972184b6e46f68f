//! Site configuration management for `enigma.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── home       # [home]
//! │   ├── integrations # [integrations]
//! │   ├── markdown   # [markdown]
//! │   └── site       # [site]
//! ├── types/         # ConfigError, diagnostics, field paths
//! ├── util.rs        # URL/base helpers, config file lookup
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! There is exactly one config per run. It is loaded before any command
//! executes and passed down by reference.

pub mod section;
pub mod types;
mod util;

pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use section::{BuildConfig, HomeConfig, IntegrationsConfig, MarkdownConfig, SiteInfoConfig};
use util::find_config_file;

use crate::cli::{Cli, Commands};
use crate::log;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `enigma.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Content location
    #[serde(default)]
    pub build: BuildConfig,

    /// Frontmatter transforms
    #[serde(default)]
    pub markdown: MarkdownConfig,

    /// Registered integrations
    #[serde(default)]
    pub integrations: IntegrationsConfig,

    /// Homepage hero text
    #[serde(default)]
    pub home: HomeConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For every command but `init`, searches upward from cwd to find the
    /// config file. The project root is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli, &cwd)
    }

    /// Load configuration as if started from `cwd`.
    fn load_from(cli: &Cli, cwd: &Path) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli, cwd);

        if !cli.is_init() && !exists {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found, run `enigma-bits init` to create one",
                cli.config.display()
            )));
        }

        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.config_path = config_path;
        config.finalize(cli);

        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli, cwd: &Path) -> (PathBuf, bool) {
        if let Commands::Init { .. } = cli.command {
            let path = cwd.join(&cli.config);
            let exists = path.exists();
            return (path, exists);
        }

        match find_config_file(&cli.config, cwd) {
            Some(path) => (path, true),
            None => (cwd.join(&cli.config), false),
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        if let Some(content) = &cli.content {
            self.build.content = content.clone();
        }

        self.normalize_paths(&root);
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            log!("warning"; "- {}", field);
        }
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path) {
        use crate::utils::path::normalize_path;

        let root = normalize_path(root);
        self.set_root(&root);
        self.config_path = normalize_path(&self.config_path);

        self.build.content = normalize_path(&root.join(&self.build.content));

        if let Some(config) = self.integrations.tailwind.config.take() {
            self.integrations.tailwind.config = Some(normalize_path(&root.join(config)));
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if !self.config_path.exists() {
            bail!(ConfigError::Validation("config file not found".into()));
        }

        self.site.validate(&mut diag);
        self.build.validate(&mut diag);
        self.markdown.validate(&mut diag);
        self.integrations.validate(&mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config whose first lines sit inside `[site]`.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_toml() {
        let result = SiteConfig::parse_with_ignored("[site\ntitle = \"Enigma Bits\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.root, PathBuf::new());
        assert_eq!(config.site.title, "");
        assert!(config.integrations.tailwind.enable);
        assert_eq!(config.markdown.default_layout, crate::pipeline::DEFAULT_LAYOUT);
    }

    #[test]
    fn test_root_helpers() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/blog"));
        assert_eq!(
            config.root_relative("/blog/src/pages/a.md"),
            PathBuf::from("src/pages/a.md")
        );
        assert_eq!(config.root_relative("/other/a.md"), PathBuf::from("/other/a.md"));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_single_config_with_optional_url_and_base() {
        let config = test_parse_config(
            r#"
url = "https://example.github.io/blog"

[markdown]
transforms = ["layout"]

[integrations.tailwind]
enable = false
"#,
        );
        assert_eq!(config.site.resolved_base(), "/blog/");
        assert!(!config.integrations.tailwind.enable);
    }

    #[test]
    fn test_normalize_paths_relative_to_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.config_path = dir.path().join("enigma.toml");
        config.integrations.tailwind.config = Some(PathBuf::from("tailwind.config.cjs"));
        config.normalize_paths(dir.path());

        let root = crate::utils::path::normalize_path(dir.path());
        assert_eq!(config.root, root);
        assert_eq!(config.build.content, root.join("src/pages/posts"));
        assert_eq!(
            config.integrations.tailwind.config,
            Some(root.join("tailwind.config.cjs"))
        );
    }

    mod load {
        use crate::cli::Cli;
        use crate::config::{ConfigError, SiteConfig};
        use crate::utils::path::normalize_path;
        use clap::Parser;
        use std::fs;

        fn cli(args: &[&str]) -> Cli {
            Cli::try_parse_from(std::iter::once("enigma-bits").chain(args.iter().copied())).unwrap()
        }

        fn site(config: &str) -> tempfile::TempDir {
            let dir = tempfile::tempdir().unwrap();
            fs::create_dir_all(dir.path().join("src/pages/posts/2024")).unwrap();
            fs::create_dir_all(dir.path().join("notes")).unwrap();
            fs::write(dir.path().join("enigma.toml"), config).unwrap();
            dir
        }

        const QUIET: &str = "[site]\ntitle = \"Blog\"\n[integrations.tailwind]\nenable = false\n";

        #[test]
        fn test_finds_config_from_nested_dir() {
            let dir = site(QUIET);
            let nested = dir.path().join("src/pages/posts/2024");

            let config = SiteConfig::load_from(&cli(&["check"]), &nested).unwrap();
            let root = normalize_path(dir.path());
            assert_eq!(config.root, root);
            assert_eq!(config.config_path, root.join("enigma.toml"));
            assert_eq!(config.build.content, root.join("src/pages/posts"));
            assert_eq!(config.site.title, "Blog");
        }

        #[test]
        fn test_content_override_is_relative_to_root() {
            let dir = site(QUIET);
            let nested = dir.path().join("src/pages");

            let config = SiteConfig::load_from(&cli(&["-c", "notes", "check"]), &nested).unwrap();
            assert_eq!(config.build.content, normalize_path(dir.path()).join("notes"));
        }

        #[test]
        fn test_invalid_config_fails_validation() {
            let dir = site("[site]\nurl = \"ftp://example.com\"\n[integrations.tailwind]\nenable = false\n");

            let err = SiteConfig::load_from(&cli(&["info"]), dir.path()).unwrap_err();
            match err.downcast_ref::<ConfigError>() {
                Some(ConfigError::Diagnostics(diag)) => {
                    assert_eq!(diag.errors()[0].field.as_str(), "site.url");
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }

        #[test]
        fn test_missing_config() {
            let dir = tempfile::tempdir().unwrap();

            let err = SiteConfig::load_from(&cli(&["-C", "absent-enigma.toml", "check"]), dir.path());
            assert!(err.is_err());

            let config =
                SiteConfig::load_from(&cli(&["-C", "absent-enigma.toml", "init"]), dir.path())
                    .unwrap();
            assert_eq!(config.config_path, normalize_path(&dir.path().join("absent-enigma.toml")));
        }
    }
}
