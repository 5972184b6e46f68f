//! `[integrations]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [integrations.tailwind]
//! enable = true
//! command = ["npx", "tailwindcss"]
//! config = "tailwind.config.cjs"
//! apply_base_styles = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Registered integrations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationsConfig {
    /// Tailwind CSS utility framework.
    pub tailwind: TailwindConfig,
}

impl IntegrationsConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.tailwind.validate(diag);
    }
}

/// Tailwind CSS integration.
///
/// Only described here; the CSS itself is produced by the Tailwind CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TailwindConfig {
    /// Register the integration.
    pub enable: bool,
    /// Tailwind CLI command (e.g., `["tailwindcss"]` or `["npx", "tailwindcss"]`).
    pub command: Vec<String>,
    /// Tailwind config file (relative to the config file).
    pub config: Option<PathBuf>,
    /// Inject Tailwind's base styles into every page.
    pub apply_base_styles: bool,
}

/// Field paths of [`TailwindConfig`] for diagnostics.
pub struct TailwindFields {
    pub enable: FieldPath,
    pub command: FieldPath,
    pub config: FieldPath,
}

impl TailwindConfig {
    pub const FIELDS: TailwindFields = TailwindFields {
        enable: FieldPath::new("integrations.tailwind.enable"),
        command: FieldPath::new("integrations.tailwind.command"),
        config: FieldPath::new("integrations.tailwind.config"),
    };

    /// Validate Tailwind configuration.
    ///
    /// # Checks
    /// - If enabled:
    ///   - `command` must not be empty
    ///   - `command[0]` should be an installed executable (or package runner)
    ///   - `config`, when set, must point to an existing file
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }

        let Some(cmd) = self.command.first() else {
            diag.error(
                Self::FIELDS.command,
                format!(
                    "{} is true but {} is empty",
                    Self::FIELDS.enable,
                    Self::FIELDS.command
                ),
            );
            return;
        };

        let is_package_runner = ["npx", "bunx", "pnpx", "yarn", "dlx"].contains(&cmd.as_str());
        if which::which(cmd).is_err() {
            if is_package_runner {
                if let Some(package) = self.command.get(1) {
                    diag.hint(
                        Self::FIELDS.command,
                        format!("`{package}` via `{cmd}`: ensure package is installed"),
                    );
                }
            } else {
                diag.warn(Self::FIELDS.command, format!("`{cmd}` not found in PATH"));
            }
        }

        if let Some(config) = &self.config {
            if !config.exists() {
                diag.error(
                    Self::FIELDS.config,
                    format!("file not found: {}", config.display()),
                );
            } else if !config.is_file() {
                diag.error(
                    Self::FIELDS.config,
                    format!("not a file: {}", config.display()),
                );
            }
        }
    }
}

impl Default for TailwindConfig {
    fn default() -> Self {
        Self {
            enable: true,
            command: vec!["tailwindcss".into()],
            config: None,
            apply_base_styles: true,
        }
    }
}
