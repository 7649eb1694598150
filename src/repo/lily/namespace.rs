//! Namespace handling for raw Lily records.
//!
//! Lily assigns each namespace a short prefix per record and qualifies
//! field names as `{prefix}${field}`. The prefix is declared in the
//! record's own `namespaces` map and may differ between records.

use serde_json::Value;

use crate::error::{BugError, Result};
use crate::record::Bug;

use super::paths::NS_BETL;

/// Prefix this record assigned to the bug namespace.
pub fn namespace_prefix<'a>(raw: &'a Value, context: &str) -> Result<&'a str> {
    let namespaces = raw
        .get("namespaces")
        .ok_or_else(|| BugError::missing_key("namespaces", context))?;
    namespaces
        .get(NS_BETL)
        .and_then(Value::as_str)
        .ok_or_else(|| BugError::missing_key(&format!("namespaces.{NS_BETL}"), context))
}

/// Look up a single namespaced field, e.g. `modification_date`.
pub fn qualified_field<'a>(raw: &'a Value, field: &str, context: &str) -> Result<&'a Value> {
    let prefix = namespace_prefix(raw, context)?;
    let key = format!("{prefix}${field}");
    raw.get("fields")
        .and_then(|fields| fields.get(&key))
        .ok_or_else(|| BugError::missing_key(&format!("fields.{key}"), context))
}

/// Turn a raw record into a canonical bug.
///
/// Only fields under the bug namespace survive, with their prefix removed.
pub fn unqualify(raw: &Value, context: &str) -> Result<Bug> {
    let qualified = format!("{}$", namespace_prefix(raw, context)?);
    let fields = raw
        .get("fields")
        .and_then(Value::as_object)
        .ok_or_else(|| BugError::missing_key("fields", context))?;

    Ok(Bug::from_map(fields.iter().filter_map(|(key, value)| {
        key.strip_prefix(qualified.as_str())
            .map(|name| (name.to_string(), value.clone()))
    })))
}
