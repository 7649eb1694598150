//! bugrepo compare - Show field differences for a bug across two backends

use clap::Args;
use colored::Colorize;
use serde_json::json;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::error::Result;
use crate::reconcile::{FieldDiff, compare};
use crate::record::BugId;
use crate::repo::{Backend, open_repository};

use super::get::display_value;

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Bug id
    pub bug_id: BugId,

    /// Backend on the left side
    #[arg(long, value_enum, default_value = "bzapi")]
    pub left: Backend,

    /// Backend on the right side
    #[arg(long, value_enum, default_value = "lily")]
    pub right: Backend,
}

pub fn run(ctx: &AppContext, args: &CompareArgs) -> Result<()> {
    let left = open_repository(args.left, &ctx.config)?.get(args.bug_id)?;
    let right = open_repository(args.right, &ctx.config)?.get(args.bug_id)?;

    let diffs = match (&left, &right) {
        (Some(l), Some(r)) => Some(compare(l, r)),
        _ => None,
    };

    if ctx.json() {
        return emit_json(&json!({
            "bug_id": args.bug_id,
            "left": {"backend": args.left, "found": left.is_some()},
            "right": {"backend": args.right, "found": right.is_some()},
            "differences": diffs,
        }));
    }

    let Some(diffs) = diffs else {
        for (backend, found) in [(args.left, left.is_some()), (args.right, right.is_some())] {
            if !found {
                println!(
                    "Bug {} not found in {}",
                    args.bug_id.to_string().cyan(),
                    backend
                );
            }
        }
        return Ok(());
    };

    if diffs.is_empty() {
        println!(
            "{} Bug {} matches in {} and {}",
            "✓".green(),
            args.bug_id.to_string().cyan(),
            args.left,
            args.right
        );
        return Ok(());
    }

    println!(
        "{} ({} vs {})",
        format!("Bug {}", args.bug_id).bold(),
        args.left,
        args.right
    );
    println!("{}", "─".repeat(60));
    for diff in &diffs {
        match diff {
            FieldDiff::OnlyLeft { field, value } => {
                println!("{} {}: {}", "-".red(), field, display_value(value));
            }
            FieldDiff::OnlyRight { field, value } => {
                println!("{} {}: {}", "+".green(), field, display_value(value));
            }
            FieldDiff::Changed { field, left, right } => {
                println!(
                    "{} {}: {} → {}",
                    "~".yellow(),
                    field,
                    display_value(left),
                    display_value(right)
                );
            }
        }
    }
    println!();
    println!("{} differing fields", diffs.len().to_string().yellow());
    Ok(())
}
