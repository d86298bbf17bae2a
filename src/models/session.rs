//! Session and slot models.
//!
//! A slot is a (day-of-week, lesson-number) coordinate within a week.
//! A placement is one session in the template week being built; a session
//! is a placement stamped with its calendar position (year, semester,
//! week number) for the external store.
//!
//! # Lesson Numbering
//! Lessons are numbered from 1. Week numbers are numbered from 1.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Monday through Friday.
    pub const WORKDAYS: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

/// A weekly time coordinate: day of week plus lesson number (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    /// Day of the week.
    pub day: Weekday,
    /// Lesson number within the day (1-based).
    pub lesson: u32,
}

impl Slot {
    /// Creates a new slot.
    pub fn new(day: Weekday, lesson: u32) -> Self {
        Self { day, lesson }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} lesson {}", self.day, self.lesson)
    }
}

/// One entry of the template week: a subject taught to a group in a room
/// at a weekly slot, not yet bound to a calendar week.
///
/// Template entries exist only inside a generation run; the replicator
/// turns them into [`Session`]s before they reach the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Weekly slot.
    pub slot: Slot,
    /// Group receiving the session.
    pub group_id: String,
    /// Subject being taught.
    pub subject_id: String,
    /// Teacher of the subject (denormalized for conflict checks).
    pub teacher_id: String,
    /// Room the session occupies.
    pub room_id: String,
}

impl Placement {
    /// Creates a new template placement.
    pub fn new(
        slot: Slot,
        group_id: impl Into<String>,
        subject_id: impl Into<String>,
        teacher_id: impl Into<String>,
        room_id: impl Into<String>,
    ) -> Self {
        Self {
            slot,
            group_id: group_id.into(),
            subject_id: subject_id.into(),
            teacher_id: teacher_id.into(),
            room_id: room_id.into(),
        }
    }
}

/// A final, calendar-stamped session — the engine's output unit.
///
/// Invariant within one (year, semester, week): no two sessions share
/// (slot, group), (slot, teacher), or (slot, room).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Weekly slot.
    pub slot: Slot,
    /// Group receiving the session.
    pub group_id: String,
    /// Subject being taught.
    pub subject_id: String,
    /// Teacher of the subject.
    pub teacher_id: String,
    /// Room the session occupies.
    pub room_id: String,
    /// Academic year label (e.g. "2025-2026").
    pub academic_year: String,
    /// Semester number within the academic year.
    pub semester: u32,
    /// Academic week number (1-based).
    pub week_number: u32,
}

impl Session {
    /// Stamps a template placement with its calendar position.
    pub fn from_placement(
        placement: &Placement,
        academic_year: impl Into<String>,
        semester: u32,
        week_number: u32,
    ) -> Self {
        Self {
            slot: placement.slot,
            group_id: placement.group_id.clone(),
            subject_id: placement.subject_id.clone(),
            teacher_id: placement.teacher_id.clone(),
            room_id: placement.room_id.clone(),
            academic_year: academic_year.into(),
            semester,
            week_number,
        }
    }
}
