//! Availability ledger for the week being built.
//!
//! Answers "is this group / teacher / room busy at (day, lesson)?" over
//! the placements made so far. Keyed per slot with busy-id sets; a slot
//! that was never recorded holds nothing. Equivalent in behavior to
//! scanning the growing template list, without the rescans.
//!
//! The ledger never decides placements by itself — a subject with no
//! teacher is never "busy" here, and rejecting it is the slot filler's
//! job.

use std::collections::{HashMap, HashSet};

use crate::models::{Placement, Slot};

/// Busy-entity index over the in-progress template week.
#[derive(Debug, Default)]
pub struct AvailabilityLedger {
    groups: HashMap<Slot, HashSet<String>>,
    teachers: HashMap<Slot, HashSet<String>>,
    rooms: HashMap<Slot, HashSet<String>>,
}

impl AvailabilityLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a placement, marking its group, teacher, and room busy at
    /// its slot.
    pub fn record(&mut self, placement: &Placement) {
        self.groups
            .entry(placement.slot)
            .or_default()
            .insert(placement.group_id.clone());
        self.teachers
            .entry(placement.slot)
            .or_default()
            .insert(placement.teacher_id.clone());
        self.rooms
            .entry(placement.slot)
            .or_default()
            .insert(placement.room_id.clone());
    }

    /// Whether the group already has a session at the slot.
    pub fn is_group_busy(&self, group_id: &str, slot: Slot) -> bool {
        self.groups
            .get(&slot)
            .is_some_and(|busy| busy.contains(group_id))
    }

    /// Whether the teacher already has a session at the slot.
    ///
    /// `None` always returns `false`: a missing teacher is never busy
    /// (and never placeable, which the slot filler enforces).
    pub fn is_teacher_busy(&self, teacher_id: Option<&str>, slot: Slot) -> bool {
        match teacher_id {
            None => false,
            Some(id) => self
                .teachers
                .get(&slot)
                .is_some_and(|busy| busy.contains(id)),
        }
    }

    /// Whether the room already holds a session at the slot.
    pub fn is_room_busy(&self, room_id: &str, slot: Slot) -> bool {
        self.rooms
            .get(&slot)
            .is_some_and(|busy| busy.contains(room_id))
    }
}
