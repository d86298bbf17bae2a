//! Run diagnostics.
//!
//! Everything a generation run could not deliver is reported here as a
//! structured variant instead of log text, so the caller can surface it
//! to an operator ("add more rooms", "assign a teacher to subject X").
//!
//! Only [`Diagnostic::Exhausted`] is fatal for a run; every other variant
//! is informational and accompanies a (possibly incomplete) session list.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::Slot;

/// A structured finding from one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Diagnostic {
    /// No candidate subject could be placed into a slot.
    #[error("no subject could be placed for group '{group_id}' at {slot}")]
    UnfillableSlot {
        /// Group whose slot stayed empty.
        group_id: String,
        /// The slot left empty.
        slot: Slot,
    },

    /// A (group, subject) pair finished below its required credit count.
    #[error("subject '{subject_id}' for group '{group_id}' reached {scheduled} of {required} required sessions")]
    UnmetQuota {
        /// Group with the deficit.
        group_id: String,
        /// Under-scheduled subject.
        subject_id: String,
        /// Sessions actually placed.
        scheduled: u32,
        /// Sessions the subject requires.
        required: u32,
    },

    /// A selected subject has no assigned teacher and can never be placed.
    #[error("subject '{subject_id}' has no assigned teacher and can never be scheduled")]
    UnassignedTeacher {
        /// The teacherless subject.
        subject_id: String,
    },

    /// A precondition failed; the run produced no sessions.
    #[error("generation impossible: {0}")]
    Exhausted(InputKind),
}

/// Inputs whose absence makes a run impossible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    /// Empty group catalog.
    Groups,
    /// Empty subject selection.
    Subjects,
    /// Empty room catalog.
    Rooms,
    /// Empty working-day list.
    WorkingDays,
    /// Zero lessons per day.
    Lessons,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            InputKind::Groups => "no groups in the catalog",
            InputKind::Subjects => "no subjects selected",
            InputKind::Rooms => "no rooms in the catalog",
            InputKind::WorkingDays => "no working days",
            InputKind::Lessons => "zero lessons per day",
        };
        f.write_str(text)
    }
}

impl Diagnostic {
    /// Creates an unfillable-slot diagnostic.
    pub fn unfillable_slot(group_id: impl Into<String>, slot: Slot) -> Self {
        Self::UnfillableSlot {
            group_id: group_id.into(),
            slot,
        }
    }

    /// Creates an unmet-quota diagnostic.
    pub fn unmet_quota(
        group_id: impl Into<String>,
        subject_id: impl Into<String>,
        scheduled: u32,
        required: u32,
    ) -> Self {
        Self::UnmetQuota {
            group_id: group_id.into(),
            subject_id: subject_id.into(),
            scheduled,
            required,
        }
    }

    /// Creates an unassigned-teacher diagnostic.
    pub fn unassigned_teacher(subject_id: impl Into<String>) -> Self {
        Self::UnassignedTeacher {
            subject_id: subject_id.into(),
        }
    }

    /// Creates an exhausted-input diagnostic.
    pub fn exhausted(input: InputKind) -> Self {
        Self::Exhausted(input)
    }

    /// Whether this diagnostic aborted the run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Exhausted(_))
    }
}
