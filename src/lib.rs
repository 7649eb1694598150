//! Uniform access to bug records held in three backing stores: the BzAPI
//! REST tracker, the Lily versioned document store and the Solr search
//! index.
//!
//! Lily is the only store that accepts deletions; see
//! [`repo::lily::cascade`] for how a bug and all of its stored versions are
//! removed.

pub mod app;
pub mod cli;
pub mod config;
pub mod dates;
pub mod error;
pub mod reconcile;
pub mod record;
pub mod repo;
pub mod test_utils;
pub mod transport;

pub use error::{BugError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
