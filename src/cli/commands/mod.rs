//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod compare;
pub mod delete;
pub mod get;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Get(args) => get::run(ctx, args),
        Commands::Delete(args) => delete::run(ctx, args),
        Commands::Compare(args) => compare::run(ctx, args),
    }
}
