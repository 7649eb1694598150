//! In-memory [`Transport`] for testing repositories without a server.
//!
//! Resources live in a map keyed by exact request path. A GET on a missing
//! path is a 404, a DELETE removes the entry, and injected statuses take
//! precedence over stored resources. A status injected for one verb beats
//! one injected for the path as a whole.
//!
//! ```rust,ignore
//! use bugrepo::test_utils::MockTransport;
//!
//! let transport = MockTransport::new();
//! transport.insert("/latest/bug/42", json!({"id": 42}));
//! transport.fail_with("/latest/bug/43", 500);
//!
//! let repo = BzapiRepo::new(&transport);
//! assert!(repo.get(42)?.is_some());
//! assert_eq!(transport.requests().len(), 1);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::Value;

use crate::error::{BugError, Result};
use crate::transport::Transport;

/// One request as seen by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
}

#[derive(Debug, Default)]
pub struct MockTransport {
    resources: RefCell<HashMap<String, Value>>,
    failures: RefCell<HashMap<String, u16>>,
    method_failures: RefCell<HashMap<(&'static str, String), u16>>,
    log: RefCell<Vec<RecordedRequest>>,
}

impl MockTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store (or replace) the body served at `path`.
    pub fn insert(&self, path: &str, body: Value) {
        self.resources.borrow_mut().insert(path.to_string(), body);
    }

    pub fn remove(&self, path: &str) -> Option<Value> {
        self.resources.borrow_mut().remove(path)
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.resources.borrow().contains_key(path)
    }

    /// Answer every request for `path` with `status`.
    pub fn fail_with(&self, path: &str, status: u16) {
        self.failures.borrow_mut().insert(path.to_string(), status);
    }

    /// Answer only `method` requests for `path` with `status`.
    pub fn fail_with_method(&self, method: &'static str, path: &str, status: u16) {
        self.method_failures
            .borrow_mut()
            .insert((method, path.to_string()), status);
    }

    pub fn clear_failures(&self) {
        self.failures.borrow_mut().clear();
        self.method_failures.borrow_mut().clear();
    }

    /// All requests so far, as `(method, path)` in order.
    #[must_use]
    pub fn requests(&self) -> Vec<(String, String)> {
        self.log
            .borrow()
            .iter()
            .map(|r| (r.method.to_string(), r.path.clone()))
            .collect()
    }

    /// Paths of every DELETE attempted, successful or not.
    #[must_use]
    pub fn deletes(&self) -> Vec<String> {
        self.log
            .borrow()
            .iter()
            .filter(|r| r.method == "DELETE")
            .map(|r| r.path.clone())
            .collect()
    }

    fn record(&self, method: &'static str, path: &str) -> Result<()> {
        self.log.borrow_mut().push(RecordedRequest {
            method,
            path: path.to_string(),
        });
        let injected = self
            .method_failures
            .borrow()
            .get(&(method, path.to_string()))
            .copied()
            .or_else(|| self.failures.borrow().get(path).copied());
        match injected {
            Some(404) => Err(BugError::NotFound(path.to_string())),
            Some(status) => Err(BugError::Transport {
                status,
                path: path.to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl Transport for MockTransport {
    fn get(&self, path: &str) -> Result<Value> {
        self.record("GET", path)?;
        self.resources
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| BugError::NotFound(path.to_string()))
    }

    fn delete(&self, path: &str) -> Result<()> {
        self.record("DELETE", path)?;
        self.resources
            .borrow_mut()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| BugError::NotFound(path.to_string()))
    }
}
