use serde::{Deserialize, Serialize};

use crate::scheduling::domain::{AvailabilitySlot, TutorId};
use crate::users::UserId;

/// Gender a tutor declares themselves open to teaching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderPreference {
    Male,
    Female,
    Any,
}

impl GenderPreference {
    pub fn any() -> Self {
        Self::Any
    }
}

/// Tutor-facing marketplace profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorProfile {
    pub tutor_id: TutorId,
    pub user_id: UserId,
    pub bio: String,
    pub subject: String,
    pub experience_years: u32,
    /// Languages the tutor teaches in.
    pub mediums: Vec<String>,
    pub gender_preference: GenderPreference,
    /// E.g. online, in-person, hybrid.
    pub teaching_modes: Vec<String>,
    /// Preferred in-person teaching radius in kilometers.
    pub preferred_distance_km: u32,
}

/// Submission payload for creating a tutor profile; the tutor id is assigned
/// by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorProfileSubmission {
    pub user_id: UserId,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default)]
    pub mediums: Vec<String>,
    #[serde(default = "GenderPreference::any")]
    pub gender_preference: GenderPreference,
    #[serde(default)]
    pub teaching_modes: Vec<String>,
    #[serde(default)]
    pub preferred_distance_km: u32,
}

/// Academic history attached to a user, one entry per qualification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicProfile {
    pub user_id: UserId,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub graduation_year: Option<u16>,
    #[serde(default)]
    pub results: String,
    /// Storage key of an uploaded certificate; the document itself lives with
    /// the file-storage collaborator.
    #[serde(default)]
    pub certificate_key: Option<String>,
}

/// Profile representation served to clients, embedding declared availability.
#[derive(Debug, Clone, Serialize)]
pub struct TutorProfileView {
    pub profile: TutorProfile,
    pub availability: Vec<AvailabilitySlot>,
}
