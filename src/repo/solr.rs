//! Solr (search index) repository. Read-only.
//!
//! Only unexpired documents count: a bug whose index entry has expired is
//! reported as absent.

use serde_json::Value;

use crate::error::{BugError, Result};
use crate::record::{Bug, BugId, ID_FIELD};
use crate::transport::Transport;

use super::BugRepository;

/// Field the index stores the bug identifier under.
pub const SOLR_ID_FIELD: &str = "bug_id";

#[must_use]
pub fn query_path(bug_id: BugId) -> String {
    let query = format!("{SOLR_ID_FIELD}:{bug_id} expiration_date:[NOW TO *]");
    format!("/solr/select/?q={}&rows=1&wt=json", urlencoding::encode(&query))
}

#[derive(Debug)]
pub struct SolrRepo<T> {
    transport: T,
}

impl<T: Transport> SolrRepo<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl<T: Transport> BugRepository for SolrRepo<T> {
    fn name(&self) -> &'static str {
        "solr"
    }

    fn get(&self, bug_id: BugId) -> Result<Option<Bug>> {
        let response = match self.transport.get(&query_path(bug_id)) {
            Ok(response) => response,
            Err(err) if err.is_not_found() => return Ok(None),
            Err(err) => return Err(err),
        };
        let docs = response
            .get("response")
            .and_then(|r| r.get("docs"))
            .and_then(Value::as_array)
            .ok_or_else(|| BugError::missing_key("response.docs", "solr select"))?;

        let Some(doc) = docs.first() else {
            return Ok(None);
        };
        let Value::Object(mut fields) = doc.clone() else {
            return Err(BugError::MalformedResponse(
                "solr document is not an object".to_string(),
            ));
        };
        let id = fields
            .get(SOLR_ID_FIELD)
            .cloned()
            .ok_or_else(|| BugError::missing_key(SOLR_ID_FIELD, "solr document"))?;
        fields.insert(ID_FIELD.to_string(), id);

        Ok(Some(Bug::from_object(fields)))
    }

    fn delete(&self, _bug_id: BugId) -> Result<()> {
        Err(BugError::Unsupported {
            backend: "solr",
            operation: "delete",
        })
    }
}
