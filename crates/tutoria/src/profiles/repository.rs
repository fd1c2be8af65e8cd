use super::domain::{AcademicProfile, TutorProfile};
use crate::scheduling::domain::TutorId;
use crate::users::UserId;

/// Storage abstraction for tutor and academic profiles.
pub trait ProfileRepository: Send + Sync {
    fn insert(&self, profile: TutorProfile) -> Result<TutorProfile, RepositoryError>;
    fn fetch(&self, tutor: &TutorId) -> Result<Option<TutorProfile>, RepositoryError>;
    fn fetch_by_user(&self, user: &UserId) -> Result<Option<TutorProfile>, RepositoryError>;
    fn record_academic(&self, profile: AcademicProfile) -> Result<(), RepositoryError>;
    fn academic_for(&self, user: &UserId) -> Result<Vec<AcademicProfile>, RepositoryError>;
}

/// Error enumeration for profile-repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("profile already exists")]
    Conflict,
    #[error("profile not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Hook into the account collaborator so profile creation can flip the
/// caller's tutor flag.
pub trait UserDirectory: Send + Sync {
    fn mark_tutor(&self, user: &UserId) -> Result<(), DirectoryError>;
}

/// Error enumeration for user-directory failures.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("user not found")]
    UnknownUser,
    #[error("user directory unavailable: {0}")]
    Unavailable(String),
}
