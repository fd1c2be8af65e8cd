//! Tutor availability: slot declaration and booking-window matching.
//!
//! The matcher answers "who can take this entire booking," not "who has any
//! free time during this window" — a slot qualifies only when it fully
//! contains the requested interval.

pub mod domain;
pub mod matcher;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{AvailabilitySlot, DayOfWeek, TutorId};
pub use matcher::find_available_tutors;
pub use repository::{AvailabilityRepository, RepositoryError};
pub use router::availability_router;
pub use service::{AvailabilityService, AvailabilityServiceError};
