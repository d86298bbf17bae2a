//! Timetable (run result) model.
//!
//! The output of one generation run: the final session list plus every
//! diagnostic gathered along the way. Deficiencies do not make a run a
//! failure; a run fails only when nothing could be placed at all.

use serde::{Deserialize, Serialize};

use super::{Diagnostic, Session};

/// The result of one generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// Final, calendar-stamped sessions.
    pub sessions: Vec<Session>,
    /// Findings gathered during the run.
    pub diagnostics: Vec<Diagnostic>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a failed result carrying only diagnostics.
    pub fn failed(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            sessions: Vec::new(),
            diagnostics,
        }
    }

    /// Whether the run placed anything at all.
    ///
    /// Deficiencies (unmet quotas, empty slots) do not fail a run; only a
    /// run that produced zero sessions is a failure.
    pub fn is_success(&self) -> bool {
        !self.sessions.is_empty()
    }

    /// Number of final sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Whether any diagnostics were recorded.
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Returns all sessions for a given group.
    pub fn sessions_for_group(&self, group_id: &str) -> Vec<&Session> {
        self.sessions
            .iter()
            .filter(|s| s.group_id == group_id)
            .collect()
    }

    /// Returns all sessions for a given week number.
    pub fn sessions_for_week(&self, week_number: u32) -> Vec<&Session> {
        self.sessions
            .iter()
            .filter(|s| s.week_number == week_number)
            .collect()
    }

    /// Returns the quota deficiencies among the diagnostics.
    pub fn deficits(&self) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::UnmetQuota { .. }))
            .collect()
    }

    /// Sessions sorted for presentation: week, then day, lesson, group.
    pub fn sessions_ordered(&self) -> Vec<&Session> {
        let mut ordered: Vec<&Session> = self.sessions.iter().collect();
        ordered.sort_by(|a, b| {
            (a.week_number, a.slot, a.group_id.as_str())
                .cmp(&(b.week_number, b.slot, b.group_id.as_str()))
        });
        ordered
    }
}
