//! Site initialization: writes a default `enigma.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::config::SiteConfig;
use crate::log;

/// Title written into a fresh config.
const DEFAULT_TITLE: &str = "Enigma Bits";

/// Render the default config file.
pub fn generate_config_template() -> Result<String> {
    let mut config = SiteConfig::default();
    config.site.title = DEFAULT_TITLE.into();
    toml::to_string_pretty(&config).context("Failed to serialize default config")
}

/// Write the default config next to `config.config_path`.
///
/// If `dry_run` is true, only prints the config to stdout.
pub fn new_site(config: &SiteConfig, dry_run: bool) -> Result<()> {
    let template = generate_config_template()?;

    if dry_run {
        print!("{template}");
        return Ok(());
    }

    write_config(&config.config_path, &template)?;
    log!("init"; "wrote {}", config.root_relative(&config.config_path).display());

    if !config.build.content.exists() {
        fs::create_dir_all(&config.build.content).with_context(|| {
            format!("Failed to create {}", config.build.content.display())
        })?;
        log!("init"; "created {}", config.root_relative(&config.build.content).display());
    }

    Ok(())
}

fn write_config(path: &Path, template: &str) -> Result<()> {
    if path.exists() {
        bail!("{} already exists, refusing to overwrite", path.display());
    }
    fs::write(path, template).with_context(|| format!("Failed to write {}", path.display()))
}
