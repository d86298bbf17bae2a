//! Generation request model.
//!
//! Captures everything one generation run needs beyond the catalogs:
//! which semester is being built, which subjects were selected for it,
//! the weekly grid (working days × lessons per day), and whether the
//! template week repeats across the whole semester.

use serde::{Deserialize, Serialize};

use super::Weekday;

/// Parameters for one generation run.
///
/// Read-only input created by the caller. The subject selection is a list
/// of subject IDs resolved against the subject catalog at run start;
/// unknown IDs are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Academic year label (e.g. "2025-2026").
    pub academic_year: String,
    /// Semester number within the academic year.
    pub semester: u32,
    /// Subjects selected for this semester, by ID.
    pub subject_ids: Vec<String>,
    /// Working days, in placement order. Must be non-empty.
    pub working_days: Vec<Weekday>,
    /// Lessons per working day. Must be positive.
    pub lessons_per_day: u32,
    /// Replicate the template week across the whole semester.
    pub repeat_weekly: bool,
}

impl GenerationRequest {
    /// Creates a request for the given year and semester.
    ///
    /// Working days and lessons per day start empty/zero and must be set
    /// before generation; validation rejects a degenerate grid.
    pub fn new(academic_year: impl Into<String>, semester: u32) -> Self {
        Self {
            academic_year: academic_year.into(),
            semester,
            subject_ids: Vec::new(),
            working_days: Vec::new(),
            lessons_per_day: 0,
            repeat_weekly: false,
        }
    }

    /// Adds one subject to the selection.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subject_ids.push(subject_id.into());
        self
    }

    /// Sets the subject selection.
    pub fn with_subjects(mut self, subject_ids: Vec<String>) -> Self {
        self.subject_ids = subject_ids;
        self
    }

    /// Sets the working days, in placement order.
    pub fn with_working_days(mut self, days: Vec<Weekday>) -> Self {
        self.working_days = days;
        self
    }

    /// Sets the number of lessons per working day.
    pub fn with_lessons_per_day(mut self, lessons: u32) -> Self {
        self.lessons_per_day = lessons;
        self
    }

    /// Sets whether the template week repeats across the semester.
    pub fn with_repeat_weekly(mut self, repeat: bool) -> Self {
        self.repeat_weekly = repeat;
        self
    }

    /// Number of weekly slots available to each group.
    pub fn slot_count(&self) -> usize {
        self.working_days.len() * self.lessons_per_day as usize
    }
}
