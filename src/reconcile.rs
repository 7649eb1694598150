//! Field-level comparison of the same bug as seen by two backends.
//!
//! Backends disagree on representation more often than on content: the
//! search index stores ids as numbers, the REST API as strings, and some
//! importers leave trailing whitespace. Values are normalized before they
//! are compared so that only real differences are reported.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;

use crate::record::Bug;

/// One field that differs between two records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldDiff {
    OnlyLeft { field: String, value: Value },
    OnlyRight { field: String, value: Value },
    Changed {
        field: String,
        left: Value,
        right: Value,
    },
}

impl FieldDiff {
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::OnlyLeft { field, .. }
            | Self::OnlyRight { field, .. }
            | Self::Changed { field, .. } => field,
        }
    }
}

/// Differences between `left` and `right`, ordered by field name.
#[must_use]
pub fn compare(left: &Bug, right: &Bug) -> Vec<FieldDiff> {
    let names: BTreeSet<&str> = left
        .fields()
        .chain(right.fields())
        .map(|(name, _)| name)
        .collect();

    names
        .into_iter()
        .filter_map(|name| match (left.get(name), right.get(name)) {
            (Some(l), Some(r)) if values_match(l, r) => None,
            (Some(l), Some(r)) => Some(FieldDiff::Changed {
                field: name.to_string(),
                left: l.clone(),
                right: r.clone(),
            }),
            (Some(l), None) => Some(FieldDiff::OnlyLeft {
                field: name.to_string(),
                value: l.clone(),
            }),
            (None, Some(r)) => Some(FieldDiff::OnlyRight {
                field: name.to_string(),
                value: r.clone(),
            }),
            (None, None) => None,
        })
        .collect()
}

fn values_match(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Array(l), Value::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r).all(|(a, b)| values_match(a, b))
        }
        (Value::Object(l), Value::Object(r)) => {
            l.len() == r.len()
                && l.iter()
                    .all(|(k, a)| r.get(k).is_some_and(|b| values_match(a, b)))
        }
        _ => scalar_text(left) == scalar_text(right),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => None,
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}
