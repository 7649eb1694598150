//! Lily (versioned document store) repository.
//!
//! The only backend that supports deletion. See [`cascade`] for the
//! deletion protocol and [`paths`] for how records are addressed.

pub mod cascade;
pub mod namespace;
pub mod paths;

use crate::error::Result;
use crate::record::{Bug, BugId};
use crate::transport::Transport;

use super::BugRepository;

pub use cascade::{CascadeObserver, CascadeReport, TracingObserver, cascade_delete};
pub use paths::{NS_BETL, master_path, slave_path, version_listing_path};

/// Repository over the Lily REST interface.
pub struct LilyRepo<T> {
    transport: T,
    observer: Box<dyn CascadeObserver>,
}

impl<T: Transport> LilyRepo<T> {
    /// Repository that reports cascade progress through `tracing`.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            observer: Box::new(TracingObserver),
        }
    }

    /// Replace the cascade observer.
    #[must_use]
    pub fn with_observer(mut self, observer: impl CascadeObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Delete the bug and every stored version, returning what was done.
    pub fn cascade_delete(&self, bug_id: BugId) -> Result<CascadeReport> {
        cascade_delete(&self.transport, self.observer.as_ref(), bug_id)
    }
}

impl<T> std::fmt::Debug for LilyRepo<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LilyRepo").finish_non_exhaustive()
    }
}

impl<T: Transport> BugRepository for LilyRepo<T> {
    fn name(&self) -> &'static str {
        "lily"
    }

    fn get(&self, bug_id: BugId) -> Result<Option<Bug>> {
        let path = master_path(bug_id);
        let raw = match self.transport.get(&path) {
            Ok(raw) => raw,
            Err(err) if err.is_not_found() => return Ok(None),
            Err(err) => return Err(err),
        };
        namespace::unqualify(&raw, &format!("master record of bug {bug_id}")).map(Some)
    }

    fn delete(&self, bug_id: BugId) -> Result<()> {
        self.cascade_delete(bug_id).map(|_| ())
    }
}
