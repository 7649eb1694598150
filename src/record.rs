//! Canonical bug record shared by every backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{BugError, Result};

/// Numeric Bugzilla bug identifier.
pub type BugId = u64;

/// Reserved field carrying the bug identifier.
pub const ID_FIELD: &str = "id";

/// A bug as a flat mapping from field name to value.
///
/// Built fresh by every `get`; repositories never hold on to one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bug {
    fields: BTreeMap<String, Value>,
}

impl Bug {
    /// Copy every key/value pair. Field names are not validated.
    pub fn from_map<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self {
            fields: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Build from a decoded JSON body, which must be an object.
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self::from_object(map)),
            other => Err(BugError::MalformedResponse(format!(
                "expected a JSON object for a bug, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub(crate) fn from_object(map: Map<String, Value>) -> Self {
        Self::from_map(map)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// The `id` field, rendered as text whether it came as string or number.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.get(ID_FIELD).and_then(|value| match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
