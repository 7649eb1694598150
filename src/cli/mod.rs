//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod output;

/// Fetch, compare and delete bugs across BzAPI, Lily and Solr
#[derive(Parser, Debug)]
#[command(name = "bugrepo")]
#[command(author, version = crate::VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Emit JSON on stdout (results and errors)
    #[arg(long, global = true)]
    pub json: bool,

    /// Force plain output (no colors)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/bugrepo/config.toml)
    #[arg(long, global = true, env = "BUGREPO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// `--json` wins over `--plain`.
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.plain {
            OutputFormat::Plain
        } else {
            OutputFormat::Human
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a bug from one backend
    Get(commands::get::GetArgs),

    /// Delete bugs and all their versions from Lily
    Delete(commands::delete::DeleteArgs),

    /// Compare a bug between two backends
    Compare(commands::compare::CompareArgs),
}
