//! Command-line interface module.

mod args;
pub mod check;
pub mod info;
pub mod init;
pub mod query;

pub use args::{Cli, Commands, QueryArgs};
