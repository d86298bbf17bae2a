//! Outcome reconciliation and run statistics.
//!
//! After the slot filler finishes, every (group, subject) pair is checked
//! against its required credit count. Three outcomes, all non-fatal:
//! under-scheduled (reported as a deficiency), exactly met, and
//! over-scheduled — which cannot occur, because placement stops once a
//! quota is met, and is therefore not reported.

use std::collections::HashSet;

use tracing::warn;

use crate::models::{Diagnostic, Group, Subject, Timetable};

use super::QuotaTracker;

/// Compares final counts against required credits and reports deficits.
///
/// Teacherless subjects the slot filler never observed (every slot was
/// taken before the scan reached them) still get their structural
/// diagnostic here; `already_reported` holds the subject IDs the filler
/// reported during the run.
pub(crate) fn reconcile(
    groups: &[Group],
    subjects: &[Subject],
    quota: &QuotaTracker,
    already_reported: &HashSet<String>,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for subject in subjects {
        if !subject.has_teacher() && !already_reported.contains(&subject.id) {
            diagnostics.push(Diagnostic::unassigned_teacher(&subject.id));
        }
    }

    for group in groups {
        for subject in subjects {
            if quota.remaining(&group.id, subject) > 0 {
                let scheduled = quota.scheduled_count(&group.id, &subject.id);
                warn!(
                    group = %group.id,
                    subject = %subject.id,
                    scheduled,
                    required = subject.required_credits,
                    "quota not met"
                );
                diagnostics.push(Diagnostic::unmet_quota(
                    &group.id,
                    &subject.id,
                    scheduled,
                    subject.required_credits,
                ));
            }
        }
    }

    diagnostics
}

/// Summary figures for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationStats {
    /// Final sessions emitted.
    pub session_count: usize,
    /// Distinct week numbers emitted.
    pub week_count: usize,
    /// Slots no subject could fill.
    pub unfillable_slots: usize,
    /// (group, subject) pairs below their required credits.
    pub unmet_quotas: usize,
    /// Selected subjects with no assigned teacher.
    pub unplaceable_subjects: usize,
}

impl GenerationStats {
    /// Computes summary figures from a finished run.
    pub fn calculate(timetable: &Timetable) -> Self {
        let weeks: HashSet<u32> = timetable.sessions.iter().map(|s| s.week_number).collect();

        let mut unfillable_slots = 0;
        let mut unmet_quotas = 0;
        let mut unplaceable_subjects = 0;
        for diagnostic in &timetable.diagnostics {
            match diagnostic {
                Diagnostic::UnfillableSlot { .. } => unfillable_slots += 1,
                Diagnostic::UnmetQuota { .. } => unmet_quotas += 1,
                Diagnostic::UnassignedTeacher { .. } => unplaceable_subjects += 1,
                Diagnostic::Exhausted(_) => {}
            }
        }

        Self {
            session_count: timetable.session_count(),
            week_count: weeks.len(),
            unfillable_slots,
            unmet_quotas,
            unplaceable_subjects,
        }
    }
}
