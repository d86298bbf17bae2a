//! Greedy randomized slot filler.
//!
//! # Algorithm
//!
//! 1. Resolve the request's subject selection against the catalog and
//!    check preconditions; an impossible run returns early with only
//!    `Exhausted` diagnostics.
//! 2. For each group (catalog order), each working day (request order),
//!    each lesson 1..=lessons_per_day: try candidate subjects in a fresh
//!    random order until one fits — quota not yet met, teacher assigned
//!    and free, and a free room found in a fresh random room order.
//! 3. Record each placement in the availability ledger and quota tracker;
//!    a slot with no fitting candidate stays empty and is reported.
//! 4. Reconcile quotas for reporting, then replicate the template week
//!    across the semester.
//!
//! The per-slot re-shuffle is intentional: it spreads subjects across the
//! grid instead of always favoring the first-listed subject, and one
//! failed slot does not bias the next. There is no backtracking and no
//! retry — each slot gets one pass over one candidate ordering.
//!
//! # Complexity
//! O(g * d * l * s * r) with g groups, d days, l lessons/day,
//! s subjects, r rooms.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, trace, warn};

use crate::models::{
    Diagnostic, GenerationRequest, Group, Placement, Room, Slot, Subject, Timetable,
};
use crate::validation::validate_inputs;

use super::replicate::{replicate, DEFAULT_WEEKS_PER_SEMESTER};
use super::report::reconcile;
use super::{AvailabilityLedger, QuotaTracker};

/// Weekly timetable generator.
///
/// Places sessions greedily with randomized candidate orderings, then
/// replicates the resulting template week across the semester. Holds no
/// state between runs; independent runs may execute concurrently, each
/// with its own random source.
///
/// # Example
///
/// ```
/// use timetabler::generator::TimetableGenerator;
/// use timetabler::models::{GenerationRequest, Group, Room, Subject, Teacher, Weekday};
///
/// let groups = vec![Group::new("SE-101")];
/// let subjects = vec![Subject::new("calculus", 2).with_teacher(Teacher::new("ivanov"))];
/// let rooms = vec![Room::new("C1.237")];
/// let request = GenerationRequest::new("2025-2026", 1)
///     .with_subject("calculus")
///     .with_working_days(vec![Weekday::Monday, Weekday::Tuesday])
///     .with_lessons_per_day(2);
///
/// let timetable = TimetableGenerator::new().generate(&request, &groups, &subjects, &rooms);
/// assert!(timetable.is_success());
/// assert_eq!(timetable.session_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TimetableGenerator {
    weeks_per_semester: u32,
}

impl TimetableGenerator {
    /// Creates a generator with the default semester length.
    pub fn new() -> Self {
        Self {
            weeks_per_semester: DEFAULT_WEEKS_PER_SEMESTER,
        }
    }

    /// Sets the semester length used when a request repeats weekly.
    ///
    /// Clamped to at least one week so replication can never erase a
    /// non-empty template.
    pub fn with_weeks_per_semester(mut self, weeks: u32) -> Self {
        self.weeks_per_semester = weeks.max(1);
        self
    }

    /// Generates a timetable using a thread-local random source.
    pub fn generate(
        &self,
        request: &GenerationRequest,
        groups: &[Group],
        subjects: &[Subject],
        rooms: &[Room],
    ) -> Timetable {
        self.generate_with_rng(request, groups, subjects, rooms, &mut rand::rng())
    }

    /// Generates a timetable using the given random source.
    ///
    /// Seeding the source makes the run reproducible: the same inputs and
    /// the same seed yield the same timetable.
    pub fn generate_with_rng<R: Rng>(
        &self,
        request: &GenerationRequest,
        groups: &[Group],
        subjects: &[Subject],
        rooms: &[Room],
        rng: &mut R,
    ) -> Timetable {
        let selected = select_subjects(subjects, &request.subject_ids);

        if let Err(diagnostics) = validate_inputs(request, groups, &selected, rooms) {
            warn!(
                year = %request.academic_year,
                semester = request.semester,
                failures = diagnostics.len(),
                "generation preconditions not met"
            );
            return Timetable::failed(diagnostics);
        }

        info!(
            year = %request.academic_year,
            semester = request.semester,
            groups = groups.len(),
            subjects = selected.len(),
            rooms = rooms.len(),
            slots = request.slot_count(),
            "starting generation run"
        );

        let filled = fill_template(request, groups, &selected, rooms, rng);

        let mut diagnostics = filled.diagnostics;
        diagnostics.extend(reconcile(
            groups,
            &selected,
            &filled.quota,
            &filled.unassigned,
        ));

        let sessions = replicate(&filled.template, request, self.weeks_per_semester);

        info!(
            placed = filled.template.len(),
            sessions = sessions.len(),
            diagnostics = diagnostics.len(),
            "generation run finished"
        );

        Timetable {
            sessions,
            diagnostics,
        }
    }
}

impl Default for TimetableGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves the request's subject selection against the catalog,
/// preserving catalog order. Unknown IDs are ignored.
fn select_subjects(catalog: &[Subject], subject_ids: &[String]) -> Vec<Subject> {
    let wanted: HashSet<&str> = subject_ids.iter().map(String::as_str).collect();
    catalog
        .iter()
        .filter(|s| wanted.contains(s.id.as_str()))
        .cloned()
        .collect()
}

/// One filled template week plus the state the reporter needs.
struct FilledWeek {
    template: Vec<Placement>,
    quota: QuotaTracker,
    /// Teacherless subjects already reported during the fill.
    unassigned: HashSet<String>,
    diagnostics: Vec<Diagnostic>,
}

/// Runs the greedy fill over every (group, day, lesson) slot.
fn fill_template<R: Rng>(
    request: &GenerationRequest,
    groups: &[Group],
    subjects: &[Subject],
    rooms: &[Room],
    rng: &mut R,
) -> FilledWeek {
    let mut template: Vec<Placement> = Vec::new();
    let mut ledger = AvailabilityLedger::new();
    let mut quota = QuotaTracker::new();
    let mut unassigned: HashSet<String> = HashSet::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    let mut subject_order: Vec<usize> = (0..subjects.len()).collect();
    let mut room_order: Vec<usize> = (0..rooms.len()).collect();

    for group in groups {
        for &day in &request.working_days {
            let mut placed_today = 0u32;

            for lesson in 1..=request.lessons_per_day {
                let slot = Slot::new(day, lesson);

                // Guard against a prior pass having taken the slot.
                // Unreachable under the single-pass-per-group order.
                if ledger.is_group_busy(&group.id, slot) {
                    continue;
                }

                // Fresh candidate order per slot attempt
                subject_order.shuffle(rng);

                let mut placed = false;
                for &subject_idx in &subject_order {
                    let subject = &subjects[subject_idx];

                    if quota.scheduled_count(&group.id, &subject.id) >= subject.required_credits {
                        continue;
                    }

                    let teacher = match &subject.teacher {
                        Some(teacher) => teacher,
                        None => {
                            if unassigned.insert(subject.id.clone()) {
                                diagnostics.push(Diagnostic::unassigned_teacher(&subject.id));
                            }
                            continue;
                        }
                    };

                    if ledger.is_teacher_busy(subject.teacher_id(), slot) {
                        continue;
                    }

                    // Fresh room order per candidate subject
                    room_order.shuffle(rng);
                    let mut free_room: Option<&Room> = None;
                    for &room_idx in &room_order {
                        if !ledger.is_room_busy(&rooms[room_idx].id, slot) {
                            free_room = Some(&rooms[room_idx]);
                            break;
                        }
                    }
                    let room = match free_room {
                        Some(room) => room,
                        None => continue,
                    };

                    let placement =
                        Placement::new(slot, &group.id, &subject.id, &teacher.id, &room.id);
                    ledger.record(&placement);
                    quota.increment(&group.id, &subject.id);
                    trace!(
                        group = %group.id,
                        subject = %subject.id,
                        room = %room.id,
                        %slot,
                        "placed session"
                    );
                    template.push(placement);
                    placed_today += 1;
                    placed = true;
                    break;
                }

                if !placed {
                    debug!(group = %group.id, %slot, "slot left empty");
                    diagnostics.push(Diagnostic::unfillable_slot(&group.id, slot));
                }
            }

            trace!(group = %group.id, %day, placed_today, "day pass complete");
        }
    }

    FilledWeek {
        template,
        quota,
        unassigned,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InputKind, Session, Teacher, Weekday};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn group(id: &str) -> Group {
        Group::new(id).with_name(id.to_uppercase())
    }

    fn subject(id: &str, credits: u32, teacher_id: &str) -> Subject {
        Subject::new(id, credits).with_teacher(Teacher::new(teacher_id))
    }

    fn request(days: Vec<Weekday>, lessons: u32, subject_ids: &[&str]) -> GenerationRequest {
        GenerationRequest::new("2025-2026", 1)
            .with_subjects(subject_ids.iter().map(|s| s.to_string()).collect())
            .with_working_days(days)
            .with_lessons_per_day(lessons)
    }

    fn rng(seed: u64) -> SmallRng {
        SmallRng::seed_from_u64(seed)
    }

    /// Asserts the within-week double-booking invariant over final sessions.
    fn assert_conflict_free(sessions: &[Session]) {
        let mut group_slots = HashSet::new();
        let mut teacher_slots = HashSet::new();
        let mut room_slots = HashSet::new();
        for s in sessions {
            let week = (s.academic_year.clone(), s.semester, s.week_number);
            assert!(
                group_slots.insert((week.clone(), s.slot, s.group_id.clone())),
                "group '{}' double-booked at {}",
                s.group_id,
                s.slot
            );
            assert!(
                teacher_slots.insert((week.clone(), s.slot, s.teacher_id.clone())),
                "teacher '{}' double-booked at {}",
                s.teacher_id,
                s.slot
            );
            assert!(
                room_slots.insert((week, s.slot, s.room_id.clone())),
                "room '{}' double-booked at {}",
                s.room_id,
                s.slot
            );
        }
    }

    #[test]
    fn test_quota_fills_and_leaves_spare_slot_empty() {
        // 1 group, 1 subject needing 3 sessions, 4 available slots
        let groups = vec![group("a")];
        let subjects = vec![subject("calculus", 3, "T1")];
        let rooms = vec![Room::new("R1")];
        let req = request(vec![Weekday::Monday, Weekday::Tuesday], 2, &["calculus"]);

        let timetable = TimetableGenerator::new().generate_with_rng(
            &req,
            &groups,
            &subjects,
            &rooms,
            &mut rng(1),
        );

        assert!(timetable.is_success());
        assert_eq!(timetable.session_count(), 3);
        let empty_slots = timetable
            .diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::UnfillableSlot { .. }))
            .count();
        assert_eq!(empty_slots, 1);
        assert!(timetable.deficits().is_empty());
        assert_conflict_free(&timetable.sessions);
    }

    #[test]
    fn test_no_double_booking_under_pressure() {
        // More demand than the grid can hold; invariants must still hold
        let groups = vec![group("a"), group("b"), group("c")];
        let subjects = vec![
            subject("calculus", 3, "T1"),
            subject("physics", 3, "T2"),
            subject("history", 2, "T3"),
            subject("english", 2, "T4"),
        ];
        let rooms = vec![Room::new("R1"), Room::new("R2")];
        let req = request(
            vec![Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday],
            4,
            &["calculus", "physics", "history", "english"],
        );

        for seed in 0..10 {
            let timetable = TimetableGenerator::new().generate_with_rng(
                &req,
                &groups,
                &subjects,
                &rooms,
                &mut rng(seed),
            );
            assert!(timetable.is_success());
            assert_conflict_free(&timetable.sessions);

            // Placement never exceeds any quota
            let mut counts: HashMap<(&str, &str), u32> = HashMap::new();
            for s in &timetable.sessions {
                *counts
                    .entry((s.group_id.as_str(), s.subject_id.as_str()))
                    .or_insert(0) += 1;
            }
            for subject in &subjects {
                for group in &groups {
                    let placed = counts
                        .get(&(group.id.as_str(), subject.id.as_str()))
                        .copied()
                        .unwrap_or(0);
                    assert!(placed <= subject.required_credits);
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_timetable() {
        let groups = vec![group("a"), group("b")];
        let subjects = vec![subject("calculus", 2, "T1"), subject("physics", 2, "T2")];
        let rooms = vec![Room::new("R1"), Room::new("R2")];
        let req = request(vec![Weekday::Monday, Weekday::Tuesday], 3, &["calculus", "physics"]);
        let generator = TimetableGenerator::new();

        let first = generator.generate_with_rng(&req, &groups, &subjects, &rooms, &mut rng(7));
        let second = generator.generate_with_rng(&req, &groups, &subjects, &rooms, &mut rng(7));

        assert_eq!(first.sessions, second.sessions);
        assert_eq!(first.diagnostics, second.diagnostics);
    }

    #[test]
    fn test_zero_rooms_fails() {
        let groups = vec![group("a")];
        let subjects = vec![subject("calculus", 1, "T1")];
        let req = request(vec![Weekday::Monday], 2, &["calculus"]);

        let timetable =
            TimetableGenerator::new().generate_with_rng(&req, &groups, &subjects, &[], &mut rng(1));

        assert!(!timetable.is_success());
        assert!(timetable.sessions.is_empty());
        assert_eq!(
            timetable.diagnostics,
            vec![Diagnostic::exhausted(InputKind::Rooms)]
        );
    }

    #[test]
    fn test_empty_subject_selection_fails() {
        // Request names only an ID missing from the catalog
        let groups = vec![group("a")];
        let subjects = vec![subject("calculus", 1, "T1")];
        let rooms = vec![Room::new("R1")];
        let req = request(vec![Weekday::Monday], 2, &["no-such-subject"]);

        let timetable = TimetableGenerator::new().generate_with_rng(
            &req,
            &groups,
            &subjects,
            &rooms,
            &mut rng(1),
        );

        assert!(!timetable.is_success());
        assert_eq!(
            timetable.diagnostics,
            vec![Diagnostic::exhausted(InputKind::Subjects)]
        );
    }

    #[test]
    fn test_teacherless_subject_never_placed() {
        let groups = vec![group("a")];
        let subjects = vec![Subject::new("ethics", 2), subject("calculus", 2, "T1")];
        let rooms = vec![Room::new("R1")];
        let req = request(vec![Weekday::Monday], 4, &["ethics", "calculus"]);

        let timetable = TimetableGenerator::new().generate_with_rng(
            &req,
            &groups,
            &subjects,
            &rooms,
            &mut rng(3),
        );

        assert!(timetable.is_success());
        assert!(timetable.sessions.iter().all(|s| s.subject_id != "ethics"));

        let structural = timetable
            .diagnostics
            .iter()
            .filter(|d| **d == Diagnostic::unassigned_teacher("ethics"))
            .count();
        assert_eq!(structural, 1);
        assert!(timetable
            .diagnostics
            .contains(&Diagnostic::unmet_quota("a", "ethics", 0, 2)));
    }

    #[test]
    fn test_shared_teacher_blocks_parallel_groups() {
        // One subject, one teacher, one slot: only the first group gets it
        let groups = vec![group("a"), group("b")];
        let subjects = vec![subject("calculus", 1, "T1")];
        let rooms = vec![Room::new("R1"), Room::new("R2")];
        let req = request(vec![Weekday::Monday], 1, &["calculus"]);

        let timetable = TimetableGenerator::new().generate_with_rng(
            &req,
            &groups,
            &subjects,
            &rooms,
            &mut rng(5),
        );

        assert_eq!(timetable.session_count(), 1);
        assert_eq!(timetable.sessions[0].group_id, "a");
        assert!(timetable
            .diagnostics
            .contains(&Diagnostic::unfillable_slot("b", Slot::new(Weekday::Monday, 1))));
        assert!(timetable
            .diagnostics
            .contains(&Diagnostic::unmet_quota("b", "calculus", 0, 1)));
    }

    #[test]
    fn test_single_room_never_shared_within_a_slot() {
        // Two groups, two subjects, one room, two slots: the first group
        // fills both slots, the second finds the room taken everywhere.
        let groups = vec![group("a"), group("b")];
        let subjects = vec![subject("calculus", 1, "T1"), subject("physics", 1, "T2")];
        let rooms = vec![Room::new("R1")];
        let req = request(vec![Weekday::Monday], 2, &["calculus", "physics"]);

        for seed in 0..10 {
            let timetable = TimetableGenerator::new().generate_with_rng(
                &req,
                &groups,
                &subjects,
                &rooms,
                &mut rng(seed),
            );

            assert_eq!(timetable.session_count(), 2);
            assert!(timetable.sessions.iter().all(|s| s.group_id == "a"));

            let mut room_slots = HashSet::new();
            for s in &timetable.sessions {
                assert!(
                    room_slots.insert((s.slot, s.room_id.clone())),
                    "room shared within one slot"
                );
            }
        }
    }

    #[test]
    fn test_repeat_weekly_stamps_every_week() {
        let groups = vec![group("a")];
        let subjects = vec![subject("calculus", 2, "T1")];
        let rooms = vec![Room::new("R1")];
        let req = request(vec![Weekday::Monday], 2, &["calculus"]).with_repeat_weekly(true);

        let timetable = TimetableGenerator::new()
            .with_weeks_per_semester(3)
            .generate_with_rng(&req, &groups, &subjects, &rooms, &mut rng(2));

        assert_eq!(timetable.session_count(), 6);
        for week in 1..=3 {
            assert_eq!(timetable.sessions_for_week(week).len(), 2);
        }
        assert!(timetable
            .sessions
            .iter()
            .all(|s| s.academic_year == "2025-2026" && s.semester == 1));
    }

    #[test]
    fn test_weeks_per_semester_clamps_to_one() {
        let generator = TimetableGenerator::new().with_weeks_per_semester(0);
        assert_eq!(generator.weeks_per_semester, 1);
    }

    #[test]
    fn test_selection_preserves_catalog_order() {
        let catalog = vec![
            subject("calculus", 1, "T1"),
            subject("physics", 1, "T2"),
            subject("history", 1, "T3"),
        ];
        let ids = vec!["history".to_string(), "calculus".to_string()];

        let selected = select_subjects(&catalog, &ids);
        let selected_ids: Vec<&str> = selected.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(selected_ids, vec!["calculus", "history"]);
    }
}
