//! Precondition checks for generation runs.
//!
//! A run is impossible without groups, a subject selection, rooms, working
//! days, and a positive lesson count. All failed preconditions are
//! collected and reported together as [`Diagnostic::Exhausted`] entries;
//! any of them aborts the run before the placement algorithm starts.
//!
//! Local failures (a slot that cannot be filled, a quota that cannot be
//! met) are not preconditions — the engine records them as diagnostics
//! while the run continues.

use crate::models::{Diagnostic, GenerationRequest, Group, InputKind, Room, Subject};

/// Validation result.
pub type ValidationResult = Result<(), Vec<Diagnostic>>;

/// Validates the inputs of a generation run.
///
/// `subjects` is the resolved semester selection, not the full catalog.
///
/// # Returns
/// `Ok(())` if the run can proceed, `Err(diagnostics)` with one
/// [`Diagnostic::Exhausted`] entry per failed precondition.
pub fn validate_inputs(
    request: &GenerationRequest,
    groups: &[Group],
    subjects: &[Subject],
    rooms: &[Room],
) -> ValidationResult {
    let mut diagnostics = Vec::new();

    if groups.is_empty() {
        diagnostics.push(Diagnostic::exhausted(InputKind::Groups));
    }
    if subjects.is_empty() {
        diagnostics.push(Diagnostic::exhausted(InputKind::Subjects));
    }
    if rooms.is_empty() {
        diagnostics.push(Diagnostic::exhausted(InputKind::Rooms));
    }
    if request.working_days.is_empty() {
        diagnostics.push(Diagnostic::exhausted(InputKind::WorkingDays));
    }
    if request.lessons_per_day == 0 {
        diagnostics.push(Diagnostic::exhausted(InputKind::Lessons));
    }

    if diagnostics.is_empty() {
        Ok(())
    } else {
        Err(diagnostics)
    }
}
