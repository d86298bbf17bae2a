//! Weekly timetable generation for teaching organizations.
//!
//! Assigns teaching sessions (subject × group) to weekly time slots
//! (day-of-week × lesson-number), each session bound to a room, under
//! hard availability constraints — no double-booking of a group, a
//! teacher, or a room — and a soft quota target: every subject must
//! accumulate its required credit count of sessions per group.
//!
//! The engine is a greedy randomized placer, not an optimizer. It may
//! leave demand unmet and reports what it failed to place as structured
//! diagnostics instead of failing the run. Persistence, rendering, and
//! academic-calendar date arithmetic are the caller's concern: catalogs
//! go in, a session list and diagnostics come out.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Group`, `Subject`, `Teacher`, `Room`,
//!   `Slot`, `Session`, `GenerationRequest`, `Timetable`, `Diagnostic`
//! - **`generator`**: The engine — slot filler, availability ledger,
//!   quota tracker, week replicator, run statistics
//! - **`validation`**: Precondition checks that abort an impossible run

pub mod generator;
pub mod models;
pub mod validation;
