//! Timetabling domain models.
//!
//! Core data types for weekly timetable generation: the catalogs the
//! caller provides, the per-run request, and the session forms the engine
//! produces.
//!
//! # Catalog vs. Output
//!
//! | Type | Role |
//! |------|------|
//! | `Group`, `Subject`, `Room` | Read-only catalogs, referenced by id |
//! | `GenerationRequest` | Per-run parameters |
//! | `Placement` | Template-week entry, internal to a run |
//! | `Session` | Final calendar-stamped entry, the output unit |
//! | `Timetable` | Run result: sessions + diagnostics |

mod diagnostic;
mod group;
mod request;
mod room;
mod session;
mod subject;
mod timetable;

pub use diagnostic::{Diagnostic, InputKind};
pub use group::Group;
pub use request::GenerationRequest;
pub use room::Room;
pub use session::{Placement, Session, Slot, Weekday};
pub use subject::{Subject, Teacher};
pub use timetable::Timetable;
