//! Cascade deletion of a bug's master record and all of its versions.
//!
//! Every version of a master is mirrored as a separate slave record. The
//! slaves go first, in listing order, then the master. The whole sequence
//! is safe to re-run: slaves that are already gone are skipped and a master
//! that no longer exists ends the run early.

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::dates::{format_as_timestamp, parse_from_iso};
use crate::error::{BugError, Result};
use crate::record::BugId;
use crate::transport::Transport;

use super::namespace::qualified_field;
use super::paths::{master_path, slave_path, version_listing_path};

/// Checkpoints reported while a cascade runs.
///
/// All methods default to doing nothing.
pub trait CascadeObserver {
    /// The master does not exist; nothing will be deleted.
    fn master_absent(&self, _bug_id: BugId) {}

    fn listing_resolved(&self, _bug_id: BugId, _versions: usize) {}

    /// `ordinal` is 1-based, in listing order.
    fn slave_found(&self, _bug_id: BugId, _ordinal: usize, _slave_id: &str) {}

    fn slave_deleted(&self, _bug_id: BugId, _ordinal: usize, _slave_id: &str) {}

    /// The slave was not there (incomplete import or earlier partial run).
    fn slave_missing(&self, _bug_id: BugId, _ordinal: usize, _path: &str) {}

    fn master_deleted(&self, _bug_id: BugId) {}

    /// The master vanished between listing and deletion.
    fn master_missing(&self, _bug_id: BugId) {}
}

/// Observer that emits `tracing` events for every checkpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CascadeObserver for TracingObserver {
    fn master_absent(&self, bug_id: BugId) {
        info!(bug_id, "master record does not exist, skipping");
    }

    fn listing_resolved(&self, bug_id: BugId, versions: usize) {
        info!(bug_id, versions, "resolved master record versions");
    }

    fn slave_found(&self, bug_id: BugId, ordinal: usize, slave_id: &str) {
        info!(bug_id, version = ordinal, slave_id, "got slave record");
    }

    fn slave_deleted(&self, bug_id: BugId, ordinal: usize, slave_id: &str) {
        info!(bug_id, version = ordinal, slave_id, "deleted slave record");
    }

    fn slave_missing(&self, bug_id: BugId, ordinal: usize, path: &str) {
        warn!(bug_id, version = ordinal, path, "slave record does not exist (incomplete import?)");
    }

    fn master_deleted(&self, bug_id: BugId) {
        info!(bug_id, "deleted master record");
    }

    fn master_missing(&self, bug_id: BugId) {
        warn!(bug_id, "master record already gone at deletion time");
    }
}

/// What a cascade run did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CascadeReport {
    pub bug_id: BugId,
    /// True when the listing returned 404 and nothing was attempted.
    pub master_absent: bool,
    pub versions_listed: usize,
    pub slaves_deleted: usize,
    pub slaves_missing: usize,
    pub master_deleted: bool,
}

impl CascadeReport {
    fn new(bug_id: BugId) -> Self {
        Self {
            bug_id,
            ..Self::default()
        }
    }
}

/// Run the cascade for one bug over `transport`.
///
/// Any failure other than 404 aborts the remaining steps and propagates.
pub fn cascade_delete<T: Transport + ?Sized>(
    transport: &T,
    observer: &dyn CascadeObserver,
    bug_id: BugId,
) -> Result<CascadeReport> {
    let mut report = CascadeReport::new(bug_id);
    let master = master_path(bug_id);

    let listing = match transport.get(&version_listing_path(&master)) {
        Ok(listing) => listing,
        Err(err) if err.is_not_found() => {
            observer.master_absent(bug_id);
            report.master_absent = true;
            return Ok(report);
        }
        Err(err) => return Err(err),
    };
    let versions = listing
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| BugError::missing_key("results", "version listing"))?;

    report.versions_listed = versions.len();
    observer.listing_resolved(bug_id, versions.len());

    for (index, version) in versions.iter().enumerate() {
        let ordinal = index + 1;
        let path = version_slave_path(&master, version, ordinal)?;

        let slave = match transport.get(&path) {
            Ok(slave) => slave,
            Err(err) if err.is_not_found() => {
                observer.slave_missing(bug_id, ordinal, &path);
                report.slaves_missing += 1;
                continue;
            }
            Err(err) => return Err(err),
        };
        let slave_id = slave
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or(&path)
            .to_string();
        observer.slave_found(bug_id, ordinal, &slave_id);

        match transport.delete(&path) {
            Ok(()) => {
                observer.slave_deleted(bug_id, ordinal, &slave_id);
                report.slaves_deleted += 1;
            }
            Err(err) if err.is_not_found() => {
                observer.slave_missing(bug_id, ordinal, &path);
                report.slaves_missing += 1;
            }
            Err(err) => return Err(err),
        }
    }

    match transport.delete(&master) {
        Ok(()) => {
            observer.master_deleted(bug_id);
            report.master_deleted = true;
        }
        Err(err) if err.is_not_found() => observer.master_missing(bug_id),
        Err(err) => return Err(err),
    }

    Ok(report)
}

/// Slave path for one listing entry, resolved through the entry's own
/// namespace mapping.
fn version_slave_path(master: &str, version: &Value, ordinal: usize) -> Result<String> {
    let context = format!("version {ordinal}");
    let raw_date = qualified_field(version, "modification_date", &context)?;
    let date = raw_date.as_str().ok_or_else(|| {
        BugError::MalformedResponse(format!("{context}: modification_date is not a string"))
    })?;
    let timestamp = format_as_timestamp(&parse_from_iso(date)?);
    Ok(slave_path(master, timestamp))
}
