//! bugrepo get - Fetch a bug from one backend

use clap::Args;
use colored::Colorize;
use serde_json::Value;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::error::Result;
use crate::record::{Bug, BugId};
use crate::repo::{Backend, open_repository};

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Backend to read from
    #[arg(value_enum)]
    pub backend: Backend,

    /// Bug id
    pub bug_id: BugId,
}

pub fn run(ctx: &AppContext, args: &GetArgs) -> Result<()> {
    let repo = open_repository(args.backend, &ctx.config)?;
    let bug = repo.get(args.bug_id)?;

    if ctx.json() {
        return emit_json(&bug);
    }

    match bug {
        Some(bug) => print_bug(args.backend, args.bug_id, &bug),
        None => println!(
            "Bug {} not found in {}",
            args.bug_id.to_string().cyan(),
            args.backend
        ),
    }
    Ok(())
}

fn print_bug(backend: Backend, bug_id: BugId, bug: &Bug) {
    println!("{} {} ({})", "Bug".bold(), bug_id.to_string().cyan(), backend);
    println!("{}", "─".repeat(60));
    let width = bug.fields().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, value) in bug.fields() {
        println!("  {:<width$}  {}", name.dimmed(), display_value(value));
    }
}

pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}
