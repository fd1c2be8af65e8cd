use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveTime;
use serde_json::Value;

use crate::scheduling::domain::{AvailabilitySlot, DayOfWeek, TutorId};
use crate::scheduling::repository::{AvailabilityRepository, RepositoryError};
use crate::scheduling::router::availability_router;
use crate::scheduling::service::AvailabilityService;

pub(super) fn t(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
}

pub(super) fn slot(
    tutor: &str,
    day: DayOfWeek,
    start: (u32, u32),
    end: (u32, u32),
) -> AvailabilitySlot {
    AvailabilitySlot {
        tutor_id: TutorId(tutor.to_string()),
        day_of_week: day,
        start_time: t(start.0, start.1),
        end_time: t(end.0, end.1),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemorySlots {
    slots: Arc<Mutex<Vec<AvailabilitySlot>>>,
}

impl MemorySlots {
    pub(super) fn seeded(slots: Vec<AvailabilitySlot>) -> Self {
        Self {
            slots: Arc::new(Mutex::new(slots)),
        }
    }

    pub(super) fn all(&self) -> Vec<AvailabilitySlot> {
        self.slots.lock().expect("slot mutex poisoned").clone()
    }
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

pub(super) struct UnavailableSlots;

impl AvailabilityRepository for UnavailableSlots {
    fn insert(&self, _slot: AvailabilitySlot) -> Result<AvailabilitySlot, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn withdraw(&self, _slot: &AvailabilitySlot) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn slots_on(&self, _day: DayOfWeek) -> Result<Vec<AvailabilitySlot>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn slots_for(&self, _tutor: &TutorId) -> Result<Vec<AvailabilitySlot>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// The roster exercised by most matching tests:
/// junaid MON 9-12 / MON 14-17 / TUE 10-13, tarikul MON 10-13 / WED 9-12,
/// tasmin MON 9:30-11:30 / MON 15-16, diana TUE 9-17.
pub(super) fn sample_roster() -> MemorySlots {
    MemorySlots::seeded(vec![
        slot("junaid", DayOfWeek::Monday, (9, 0), (12, 0)),
        slot("junaid", DayOfWeek::Monday, (14, 0), (17, 0)),
        slot("junaid", DayOfWeek::Tuesday, (10, 0), (13, 0)),
        slot("tarikul", DayOfWeek::Monday, (10, 0), (13, 0)),
        slot("tarikul", DayOfWeek::Wednesday, (9, 0), (12, 0)),
        slot("tasmin", DayOfWeek::Monday, (9, 30), (11, 30)),
        slot("tasmin", DayOfWeek::Monday, (15, 0), (16, 0)),
        slot("diana", DayOfWeek::Tuesday, (9, 0), (17, 0)),
    ])
}

pub(super) fn service_with(repository: MemorySlots) -> AvailabilityService<MemorySlots> {
    AvailabilityService::new(Arc::new(repository))
}

pub(super) fn router_with(repository: MemorySlots) -> axum::Router {
    availability_router(Arc::new(service_with(repository)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
