//! Standalone task models
//!
//! These tasks live in the task store and are unrelated to the tasks owned by
//! devices.

use serde::{Deserialize, Serialize};

/// Task identifier, kept exactly as the caller sent it.
///
/// Numbers and strings are distinct: `1` and `"1"` never compare equal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub serde_json::Value);

impl TaskId {
    /// Whether this ID renders as the given path segment
    pub fn matches_segment(&self, segment: &str) -> bool {
        match &self.0 {
            serde_json::Value::String(s) => s == segment,
            serde_json::Value::Number(n) => n.to_string() == segment,
            _ => false,
        }
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(serde_json::Value::from(id))
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(serde_json::Value::from(id))
    }
}

impl From<i64> for TaskId {
    fn from(id: i64) -> Self {
        Self(serde_json::Value::from(id))
    }
}

impl From<i32> for TaskId {
    fn from(id: i32) -> Self {
        Self(serde_json::Value::from(id))
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// A task tracked by the task store.
///
/// Only `id` and `status` are interpreted, and neither is validated: a
/// missing ID is `null` and a missing status is empty. Any other fields
/// supplied by the caller are kept as-is and serialized back out next to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandaloneTask {
    /// Task ID (duplicates are allowed)
    #[serde(default)]
    pub id: TaskId,

    /// Free-form status, e.g. "pending" or "in-progress"
    #[serde(default)]
    pub status: String,

    /// Caller-supplied fields
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl StandaloneTask {
    /// Create a task with no extra fields
    pub fn new(id: impl Into<TaskId>, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: status.into(),
            extra: serde_json::Map::new(),
        }
    }
}
