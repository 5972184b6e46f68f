//! Enigma Bits - frontmatter defaults and site glue for the Enigma Bits blog.

mod cli;
mod config;
mod content;
mod home;
mod integration;
mod logger;
mod page;
mod pipeline;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { dry } => cli::init::new_site(&config, *dry),
        Commands::Check => cli::check::check_site(&config),
        Commands::Query { args } => cli::query::run_query(args, &config),
        Commands::Info => cli::info::show_info(&config),
    }
}
