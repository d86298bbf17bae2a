//! Timetable generation engine.
//!
//! A best-effort greedy randomized placer: it fills one template week
//! slot by slot under hard availability constraints (no double-booking
//! of a group, a teacher, or a room), tracks per-(group, subject) credit
//! quotas, reports everything it could not place, and replicates the
//! template across the semester.
//!
//! Not a solver — no search, no backtracking, no feasibility proof.
//! A run that cannot meet all quotas still succeeds with diagnostics;
//! only a run that places nothing at all fails.
//!
//! # Components
//!
//! - [`TimetableGenerator`]: the slot filler and run orchestration
//! - [`AvailabilityLedger`]: busy-entity index over the template week
//! - [`QuotaTracker`]: per-(group, subject) session counters
//! - [`replicate`]: template-week → semester expansion
//! - [`GenerationStats`]: summary figures for a finished run

mod greedy;
mod ledger;
mod quota;
mod replicate;
mod report;

pub use greedy::TimetableGenerator;
pub use ledger::AvailabilityLedger;
pub use quota::QuotaTracker;
pub use replicate::{replicate, DEFAULT_WEEKS_PER_SEMESTER};
pub use report::GenerationStats;
