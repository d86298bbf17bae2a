//! Week replication.
//!
//! Expands one conflict-free template week into the final session list.
//! A non-repeating request yields a single stamped copy at week 1; a
//! repeating one yields a copy per week across the semester. No
//! constraint checking is re-run — weeks do not interact, and the
//! template is already conflict-free within a week by construction.

use crate::models::{GenerationRequest, Placement, Session};

/// Teaching weeks in one semester when the caller does not configure a
/// different length.
pub const DEFAULT_WEEKS_PER_SEMESTER: u32 = 15;

/// Stamps the template across the requested horizon.
///
/// One copy at week 1 when `repeat_weekly` is false, otherwise one copy
/// per week from 1 to `weeks_per_semester`. Pure and deterministic:
/// replicating the same template twice yields the same session list.
pub fn replicate(
    template: &[Placement],
    request: &GenerationRequest,
    weeks_per_semester: u32,
) -> Vec<Session> {
    let weeks = if request.repeat_weekly {
        weeks_per_semester
    } else {
        1
    };

    let mut sessions = Vec::with_capacity(template.len() * weeks as usize);
    for week_number in 1..=weeks {
        for placement in template {
            sessions.push(Session::from_placement(
                placement,
                &request.academic_year,
                request.semester,
                week_number,
            ));
        }
    }
    sessions
}
