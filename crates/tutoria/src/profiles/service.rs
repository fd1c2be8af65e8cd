use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::domain::{AcademicProfile, TutorProfile, TutorProfileSubmission, TutorProfileView};
use super::repository::{DirectoryError, ProfileRepository, RepositoryError, UserDirectory};
use crate::scheduling::domain::TutorId;
use crate::scheduling::repository::{
    AvailabilityRepository, RepositoryError as SlotRepositoryError,
};
use crate::users::UserId;

static TUTOR_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_tutor_id() -> TutorId {
    let id = TUTOR_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    TutorId(format!("tutor-{id:06}"))
}

/// Service composing the profile repository, the user directory, and the slot
/// repository for embedded availability views.
pub struct ProfileService<P, D, R> {
    profiles: Arc<P>,
    directory: Arc<D>,
    availability: Arc<R>,
}

impl<P, D, R> ProfileService<P, D, R>
where
    P: ProfileRepository + 'static,
    D: UserDirectory + 'static,
    R: AvailabilityRepository + 'static,
{
    pub fn new(profiles: Arc<P>, directory: Arc<D>, availability: Arc<R>) -> Self {
        Self {
            profiles,
            directory,
            availability,
        }
    }

    /// Create a tutor profile for a user. A user holds at most one profile;
    /// a successful create marks the account as a tutor in the directory.
    pub fn create_tutor(
        &self,
        submission: TutorProfileSubmission,
    ) -> Result<TutorProfile, ProfileServiceError> {
        if self.profiles.fetch_by_user(&submission.user_id)?.is_some() {
            return Err(ProfileServiceError::ProfileExists);
        }

        let profile = TutorProfile {
            tutor_id: next_tutor_id(),
            user_id: submission.user_id,
            bio: submission.bio,
            subject: submission.subject,
            experience_years: submission.experience_years,
            mediums: submission.mediums,
            gender_preference: submission.gender_preference,
            teaching_modes: submission.teaching_modes,
            preferred_distance_km: submission.preferred_distance_km,
        };

        let stored = self.profiles.insert(profile)?;
        self.directory.mark_tutor(&stored.user_id)?;
        Ok(stored)
    }

    /// Fetch a profile with its declared availability embedded.
    pub fn get(&self, tutor: &TutorId) -> Result<TutorProfileView, ProfileServiceError> {
        let profile = self
            .profiles
            .fetch(tutor)?
            .ok_or(ProfileServiceError::NotFound)?;
        let availability = self.availability.slots_for(tutor)?;
        Ok(TutorProfileView {
            profile,
            availability,
        })
    }

    /// Attach an academic history entry to a user.
    pub fn record_academic(&self, profile: AcademicProfile) -> Result<(), ProfileServiceError> {
        Ok(self.profiles.record_academic(profile)?)
    }

    pub fn academic_for(&self, user: &UserId) -> Result<Vec<AcademicProfile>, ProfileServiceError> {
        Ok(self.profiles.academic_for(user)?)
    }
}

/// Error raised by the profile service.
#[derive(Debug, thiserror::Error)]
pub enum ProfileServiceError {
    #[error("tutor profile already exists")]
    ProfileExists,
    #[error("tutor profile not found")]
    NotFound,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error(transparent)]
    Slots(#[from] SlotRepositoryError),
}
