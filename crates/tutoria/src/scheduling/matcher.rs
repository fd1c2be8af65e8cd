use std::collections::BTreeSet;

use chrono::NaiveTime;

use super::domain::{AvailabilitySlot, DayOfWeek, TutorId};

/// Tutors whose declared availability fully contains the requested window on
/// the given day.
///
/// A slot qualifies iff `slot.start_time <= desired_start` and
/// `slot.end_time >= desired_end`; partial overlap does not. A degenerate or
/// inverted window (`desired_start >= desired_end`) matches nothing. A tutor
/// with several qualifying slots appears once. The result is a set — callers
/// needing a stable order must sort explicitly.
pub fn find_available_tutors(
    slots: &[AvailabilitySlot],
    day: DayOfWeek,
    desired_start: NaiveTime,
    desired_end: NaiveTime,
) -> BTreeSet<TutorId> {
    if desired_start >= desired_end {
        return BTreeSet::new();
    }

    slots
        .iter()
        .filter(|slot| slot.day_of_week == day && slot.covers(desired_start, desired_end))
        .map(|slot| slot.tutor_id.clone())
        .collect()
}
