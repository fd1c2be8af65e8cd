use chrono::NaiveTime;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tutoria::config::GateConfig;
use tutoria::location::gate::GatePolicy;
use tutoria::location::store::{LocationStore, LocationStoreError};
use tutoria::profiles::domain::{AcademicProfile, TutorProfile};
use tutoria::profiles::repository::{
    DirectoryError, ProfileRepository, RepositoryError as ProfileRepositoryError, UserDirectory,
};
use tutoria::scheduling::domain::{AvailabilitySlot, DayOfWeek, TutorId};
use tutoria::scheduling::repository::{AvailabilityRepository, RepositoryError};
use tutoria::users::UserId;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySlotRepository {
    slots: Arc<Mutex<Vec<AvailabilitySlot>>>,
}

impl AvailabilityRepository for InMemorySlotRepository {
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

#[derive(Default, Clone)]
pub(crate) struct InMemoryLocationStore {
    records: Arc<Mutex<HashMap<UserId, String>>>,
}

impl LocationStore for InMemoryLocationStore {
    fn load(&self, user: &UserId) -> Result<Option<String>, LocationStoreError> {
        let guard = self.records.lock().expect("location mutex poisoned");
        Ok(guard.get(user).cloned())
    }

    fn store(&self, user: &UserId, location: &str) -> Result<(), LocationStoreError> {
        let mut guard = self.records.lock().expect("location mutex poisoned");
        guard.insert(user.clone(), location.to_string());
        Ok(())
    }
}

impl InMemoryLocationStore {
    pub(crate) fn stored(&self, user: &UserId) -> Option<String> {
        self.records
            .lock()
            .expect("location mutex poisoned")
            .get(user)
            .cloned()
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileRepository {
    profiles: Arc<Mutex<HashMap<TutorId, TutorProfile>>>,
    academic: Arc<Mutex<Vec<AcademicProfile>>>,
}

impl ProfileRepository for InMemoryProfileRepository {
    fn insert(&self, profile: TutorProfile) -> Result<TutorProfile, ProfileRepositoryError> {
        let mut guard = self.profiles.lock().expect("profile mutex poisoned");
        if guard.contains_key(&profile.tutor_id) {
            return Err(ProfileRepositoryError::Conflict);
        }
        guard.insert(profile.tutor_id.clone(), profile.clone());
        Ok(profile)
    }

    fn fetch(&self, tutor: &TutorId) -> Result<Option<TutorProfile>, ProfileRepositoryError> {
        let guard = self.profiles.lock().expect("profile mutex poisoned");
        Ok(guard.get(tutor).cloned())
    }

    fn fetch_by_user(&self, user: &UserId) -> Result<Option<TutorProfile>, ProfileRepositoryError> {
        let guard = self.profiles.lock().expect("profile mutex poisoned");
        Ok(guard
            .values()
            .find(|profile| &profile.user_id == user)
            .cloned())
    }

    fn record_academic(&self, profile: AcademicProfile) -> Result<(), ProfileRepositoryError> {
        self.academic
            .lock()
            .expect("academic mutex poisoned")
            .push(profile);
        Ok(())
    }

    fn academic_for(&self, user: &UserId) -> Result<Vec<AcademicProfile>, ProfileRepositoryError> {
        let guard = self.academic.lock().expect("academic mutex poisoned");
        Ok(guard
            .iter()
            .filter(|entry| &entry.user_id == user)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryUserDirectory {
    tutors: Arc<Mutex<Vec<UserId>>>,
}

impl UserDirectory for InMemoryUserDirectory {
    fn mark_tutor(&self, user: &UserId) -> Result<(), DirectoryError> {
        let mut guard = self.tutors.lock().expect("directory mutex poisoned");
        if !guard.contains(user) {
            guard.push(user.clone());
        }
        Ok(())
    }
}

pub(crate) fn gate_policy_from(config: &GateConfig) -> GatePolicy {
    GatePolicy::new(config.confirmation_radius_km)
}

pub(crate) fn parse_time(raw: &str) -> Result<NaiveTime, String> {
    let trimmed = raw.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|err| format!("failed to parse '{trimmed}' as HH:MM ({err})"))
}
