//! Per-invocation context shared by all commands.

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;

#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let config = Config::load(cli.config.as_deref(), &project_root)?;
        Ok(Self {
            config,
            format: cli.output_format(),
        })
    }

    #[must_use]
    pub const fn json(&self) -> bool {
        self.format.is_machine_readable()
    }
}
