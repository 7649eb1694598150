//! JSON builders for raw backend responses.

use serde_json::{Value, json};

use crate::repo::lily::NS_BETL;

/// A Lily record whose bug namespace is mapped to `prefix`.
#[must_use]
pub fn lily_record(prefix: &str, fields: Value) -> Value {
    json!({
        "id": "USER.000000#",
        "type": { "name": "betl$Bug", "version": 1 },
        "namespaces": { NS_BETL: prefix },
        "fields": fields,
    })
}

/// One entry of a version listing, carrying only its modification date.
#[must_use]
pub fn version_entry(prefix: &str, modification_date: &str) -> Value {
    json!({
        "namespaces": { NS_BETL: prefix },
        "fields": { format!("{prefix}$modification_date"): modification_date },
    })
}

#[must_use]
pub fn version_listing(entries: Vec<Value>) -> Value {
    json!({ "results": entries })
}

/// Regex matching exactly `path` followed by `suffix`, for HTTP mocks.
///
/// Accepts `#` where `path` has `%23`, in case the server decodes the
/// request path before matching.
pub fn record_path_regex(path: &str, suffix: &str) -> Result<regex::Regex, regex::Error> {
    let pattern = regex::escape(path).replace("%23", "(%23|#)");
    let anchored = format!("^{pattern}{}$", regex::escape(suffix));
    regex::Regex::new(&anchored)
}
