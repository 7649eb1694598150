//! BzAPI (REST bug tracker) repository. Read-only.

use crate::error::{BugError, Result};
use crate::record::{Bug, BugId};
use crate::transport::Transport;

use super::BugRepository;

#[must_use]
pub fn bug_path(bug_id: BugId) -> String {
    format!("/latest/bug/{bug_id}")
}

#[derive(Debug)]
pub struct BzapiRepo<T> {
    transport: T,
}

impl<T: Transport> BzapiRepo<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl<T: Transport> BugRepository for BzapiRepo<T> {
    fn name(&self) -> &'static str {
        "bzapi"
    }

    fn get(&self, bug_id: BugId) -> Result<Option<Bug>> {
        match self.transport.get(&bug_path(bug_id)) {
            Ok(raw) => Bug::from_json(raw).map(Some),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn delete(&self, _bug_id: BugId) -> Result<()> {
        Err(BugError::Unsupported {
            backend: "bzapi",
            operation: "delete",
        })
    }
}
