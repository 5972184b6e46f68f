//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Enigma Bits blog site tool
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Print debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Content directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: enigma.toml)
    #[arg(short = 'C', long, default_value = "enigma.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a default enigma.toml in the current directory
    #[command(visible_alias = "i")]
    Init {
        /// Print the config to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Validate config and run the frontmatter pass over all content
    #[command(visible_alias = "c")]
    Check,

    /// Print resolved frontmatter of content files as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },

    /// Show site metadata, hero text, transforms and integrations
    Info,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Files or directories to query. If omitted, queries all content.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Only output documents that received the default layout
    #[arg(short, long)]
    pub defaulted: bool,

    /// Include the markdown body of each document
    #[arg(short, long)]
    pub body: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
