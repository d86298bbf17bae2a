//! Subject and teacher models.
//!
//! A subject carries its weekly demand: the number of sessions each group
//! must receive over the generation horizon (its credit count) and the
//! teacher who delivers it. The engine treats teachers as opaque
//! references, used only for equality in availability checks.

use serde::{Deserialize, Serialize};

/// A teacher assigned to a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
}

impl Teacher {
    /// Creates a new teacher with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
        }
    }

    /// Sets the teacher name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// A subject to be scheduled.
///
/// A subject with no assigned teacher can never be placed; the engine
/// reports it as structurally unplaceable instead of skipping it silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Sessions each group must receive over the generation horizon.
    pub required_credits: u32,
    /// Assigned teacher. `None` = unplaceable.
    pub teacher: Option<Teacher>,
}

impl Subject {
    /// Creates a new subject with the given ID and credit requirement.
    pub fn new(id: impl Into<String>, required_credits: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            required_credits,
            teacher: None,
        }
    }

    /// Sets the subject name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Assigns a teacher.
    pub fn with_teacher(mut self, teacher: Teacher) -> Self {
        self.teacher = Some(teacher);
        self
    }

    /// Whether a teacher is assigned.
    #[inline]
    pub fn has_teacher(&self) -> bool {
        self.teacher.is_some()
    }

    /// The assigned teacher's ID, if any.
    pub fn teacher_id(&self) -> Option<&str> {
        self.teacher.as_ref().map(|t| t.id.as_str())
    }
}
