//! Integration specifications for the availability matching engine.
//!
//! The roster mirrors a realistic week of tutor declarations and is built
//! through the public service facade so the write-time validation path is
//! exercised alongside the matcher.

mod common {
    use std::sync::{Arc, Mutex};

    use chrono::NaiveTime;

    use tutoria::scheduling::domain::{AvailabilitySlot, DayOfWeek, TutorId};
    use tutoria::scheduling::repository::{AvailabilityRepository, RepositoryError};
    use tutoria::scheduling::AvailabilityService;

    pub(super) fn t(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
    }

    #[derive(Default, Clone)]
    pub(super) struct MemorySlots {
        slots: Arc<Mutex<Vec<AvailabilitySlot>>>,
    }

    impl AvailabilityRepository for MemorySlots {
        fn insert(&self, slot: AvailabilitySlot) -> Result<AvailabilitySlot, RepositoryError> {
            let mut guard = self.slots.lock().expect("slot mutex poisoned");
            if guard.contains(&slot) {
                return Err(RepositoryError::Conflict);
            }
            guard.push(slot.clone());
            Ok(slot)
        }

        fn withdraw(&self, slot: &AvailabilitySlot) -> Result<(), RepositoryError> {
            let mut guard = self.slots.lock().expect("slot mutex poisoned");
            match guard.iter().position(|stored| stored == slot) {
                Some(index) => {
                    guard.remove(index);
                    Ok(())
                }
                None => Err(RepositoryError::NotFound),
            }
        }

        fn slots_on(&self, day: DayOfWeek) -> Result<Vec<AvailabilitySlot>, RepositoryError> {
            let guard = self.slots.lock().expect("slot mutex poisoned");
            Ok(guard
                .iter()
                .filter(|slot| slot.day_of_week == day)
                .cloned()
                .collect())
        }

        fn slots_for(&self, tutor: &TutorId) -> Result<Vec<AvailabilitySlot>, RepositoryError> {
            let guard = self.slots.lock().expect("slot mutex poisoned");
            Ok(guard
                .iter()
                .filter(|slot| &slot.tutor_id == tutor)
                .cloned()
                .collect())
        }
    }

    /// junaid MON 9-12 / MON 14-17 / TUE 10-13, tarikul MON 10-13 / WED 9-12,
    /// tasmin MON 9:30-11:30 / MON 15-16, diana TUE 9-17.
    pub(super) fn weekly_roster() -> AvailabilityService<MemorySlots> {
        let service = AvailabilityService::new(Arc::new(MemorySlots::default()));
        let declarations = [
            ("junaid", DayOfWeek::Monday, (9, 0), (12, 0)),
            ("junaid", DayOfWeek::Monday, (14, 0), (17, 0)),
            ("junaid", DayOfWeek::Tuesday, (10, 0), (13, 0)),
            ("tarikul", DayOfWeek::Monday, (10, 0), (13, 0)),
            ("tarikul", DayOfWeek::Wednesday, (9, 0), (12, 0)),
            ("tasmin", DayOfWeek::Monday, (9, 30), (11, 30)),
            ("tasmin", DayOfWeek::Monday, (15, 0), (16, 0)),
            ("diana", DayOfWeek::Tuesday, (9, 0), (17, 0)),
        ];

        for (tutor, day, start, end) in declarations {
            service
                .declare_slot(AvailabilitySlot {
                    tutor_id: TutorId(tutor.to_string()),
                    day_of_week: day,
                    start_time: t(start.0, start.1),
                    end_time: t(end.0, end.1),
                })
                .expect("roster slot is valid");
        }

        service
    }

    pub(super) fn names(found: std::collections::BTreeSet<TutorId>) -> Vec<String> {
        found.into_iter().map(|TutorId(id)| id).collect()
    }
}

use common::*;

#[test]
fn window_matching_a_slot_exactly_finds_its_tutor() {
    let service = weekly_roster();
    let found = service
        .find_available_tutors("MON", t(9, 0), t(12, 0))
        .expect("query succeeds");
    assert_eq!(names(found), vec!["junaid"]);
}

#[test]
fn window_inside_a_larger_slot_finds_every_covering_tutor() {
    let service = weekly_roster();
    let found = service
        .find_available_tutors("MON", t(10, 0), t(11, 0))
        .expect("query succeeds");
    assert_eq!(names(found), vec!["junaid", "tarikul", "tasmin"]);
}

#[test]
fn short_window_is_covered_by_the_same_three_tutors() {
    let service = weekly_roster();
    let found = service
        .find_available_tutors("MON", t(10, 30), t(11, 0))
        .expect("query succeeds");
    assert_eq!(names(found), vec!["junaid", "tarikul", "tasmin"]);
}

#[test]
fn window_in_the_midday_gap_matches_nobody() {
    let service = weekly_roster();
    let found = service
        .find_available_tutors("MON", t(12, 30), t(13, 30))
        .expect("query succeeds");
    assert!(found.is_empty());
}

#[test]
fn overlapping_slots_that_end_too_early_are_excluded() {
    let service = weekly_roster();
    // 11:00-13:00 overlaps junaid (9-12) and tasmin (9:30-11:30) but only
    // tarikul (10-13) covers the whole window.
    let found = service
        .find_available_tutors("MON", t(11, 0), t(13, 0))
        .expect("query succeeds");
    assert_eq!(names(found), vec!["tarikul"]);
}

#[test]
fn other_days_have_their_own_roster() {
    let service = weekly_roster();
    let found = service
        .find_available_tutors("TUE", t(10, 30), t(12, 0))
        .expect("query succeeds");
    assert_eq!(names(found), vec!["diana", "junaid"]);
}

#[test]
fn inverted_window_yields_no_tutors() {
    let service = weekly_roster();
    let found = service
        .find_available_tutors("MON", t(15, 0), t(14, 0))
        .expect("query succeeds");
    assert!(found.is_empty());
}

#[test]
fn zero_length_window_yields_no_tutors() {
    let service = weekly_roster();
    let found = service
        .find_available_tutors("MON", t(10, 0), t(10, 0))
        .expect("query succeeds");
    assert!(found.is_empty());
}

#[test]
fn a_later_slot_can_cover_what_the_first_cannot() {
    let service = weekly_roster();
    let found = service
        .find_available_tutors("MON", t(14, 30), t(16, 30))
        .expect("query succeeds");
    assert_eq!(names(found), vec!["junaid"]);
}

#[test]
fn day_without_declarations_yields_no_tutors() {
    let service = weekly_roster();
    let found = service
        .find_available_tutors("FRI", t(9, 0), t(10, 0))
        .expect("query succeeds");
    assert!(found.is_empty());
}

#[test]
fn unknown_day_code_yields_no_tutors() {
    let service = weekly_roster();
    let found = service
        .find_available_tutors("SOMEDAY", t(9, 0), t(10, 0))
        .expect("lenient day handling");
    assert!(found.is_empty());
}
