//! Student group model.

use serde::{Deserialize, Serialize};

/// A student group that receives sessions.
///
/// Owned by the caller's catalog; the engine only reads it and references
/// it by id from placed sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique group identifier.
    pub id: String,
    /// Human-readable name (e.g. "SE-2301").
    pub name: String,
}

impl Group {
    /// Creates a new group with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
        }
    }

    /// Sets the group name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
