//! bugrepo delete - Remove bugs and all their versions from Lily
//!
//! Ids are processed one at a time, in the order given. The first failure
//! stops the run; bugs already processed stay deleted.

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::error::Result;
use crate::record::BugId;
use crate::repo::lily::{CascadeReport, LilyRepo};
use crate::transport::HttpTransport;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Bug ids to delete
    #[arg(required = true)]
    pub bug_ids: Vec<BugId>,
}

pub fn run(ctx: &AppContext, args: &DeleteArgs) -> Result<()> {
    let transport = HttpTransport::new(&ctx.config.lily.base_url, &ctx.config.http)?;
    let repo = LilyRepo::new(transport);

    let mut reports = Vec::with_capacity(args.bug_ids.len());
    for &bug_id in &args.bug_ids {
        let report = repo.cascade_delete(bug_id)?;
        if !ctx.json() {
            print_report(&report);
        }
        reports.push(report);
    }

    if ctx.json() {
        emit_json(&reports)?;
    }
    Ok(())
}

fn print_report(report: &CascadeReport) {
    let id = report.bug_id.to_string().cyan();
    if report.master_absent {
        println!("{} Bug {} not in lily, nothing to delete", "-".dimmed(), id);
        return;
    }

    let master = if report.master_deleted {
        "master deleted".green()
    } else {
        "master already gone".yellow()
    };
    println!(
        "{} Bug {}: {} of {} versions deleted, {} missing, {}",
        "✓".green(),
        id,
        report.slaves_deleted,
        report.versions_listed,
        report.slaves_missing,
        master
    );
}
