//! Tutor marketplace profiles and academic history.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{
    AcademicProfile, GenderPreference, TutorProfile, TutorProfileSubmission, TutorProfileView,
};
pub use repository::{DirectoryError, ProfileRepository, RepositoryError, UserDirectory};
pub use router::profile_router;
pub use service::{ProfileService, ProfileServiceError};
