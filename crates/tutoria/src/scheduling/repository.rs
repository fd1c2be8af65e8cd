use super::domain::{AvailabilitySlot, DayOfWeek, TutorId};

/// Storage abstraction over the declared-slot collection.
///
/// `slots_on` hands the matcher a read-only snapshot; writes go through the
/// service so the `start < end` invariant is checked in one place.
pub trait AvailabilityRepository: Send + Sync {
    fn insert(&self, slot: AvailabilitySlot) -> Result<AvailabilitySlot, RepositoryError>;
    fn withdraw(&self, slot: &AvailabilitySlot) -> Result<(), RepositoryError>;
    fn slots_on(&self, day: DayOfWeek) -> Result<Vec<AvailabilitySlot>, RepositoryError>;
    fn slots_for(&self, tutor: &TutorId) -> Result<Vec<AvailabilitySlot>, RepositoryError>;
}

/// Error enumeration for slot-repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("slot already declared")]
    Conflict,
    #[error("slot not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
