use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveTime;
use tracing::debug;

use super::domain::{AvailabilitySlot, DayOfWeek, TutorId};
use super::matcher;
use super::repository::{AvailabilityRepository, RepositoryError};

/// Service exposing the availability matching engine over a slot repository.
pub struct AvailabilityService<R> {
    repository: Arc<R>,
}

impl<R> AvailabilityService<R>
where
    R: AvailabilityRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Find tutors free for the entire `[desired_start, desired_end)` window.
    ///
    /// Unknown day codes and degenerate windows are normal inputs mapped to an
    /// empty result, never an error.
    pub fn find_available_tutors(
        &self,
        day_code: &str,
        desired_start: NaiveTime,
        desired_end: NaiveTime,
    ) -> Result<BTreeSet<TutorId>, AvailabilityServiceError> {
        let Some(day) = DayOfWeek::parse(day_code) else {
            debug!(%day_code, "unrecognized day code in availability query");
            return Ok(BTreeSet::new());
        };
        if desired_start >= desired_end {
            return Ok(BTreeSet::new());
        }

        let slots = self.repository.slots_on(day)?;
        Ok(matcher::find_available_tutors(
            &slots,
            day,
            desired_start,
            desired_end,
        ))
    }

    /// Declare a new slot. `start_time < end_time` is enforced here, at write
    /// time; stored slots are assumed valid by the matcher.
    pub fn declare_slot(
        &self,
        slot: AvailabilitySlot,
    ) -> Result<AvailabilitySlot, AvailabilityServiceError> {
        if slot.start_time >= slot.end_time {
            return Err(AvailabilityServiceError::InvalidSlot {
                start: slot.start_time,
                end: slot.end_time,
            });
        }

        Ok(self.repository.insert(slot)?)
    }

    /// Withdraw a previously declared slot.
    pub fn withdraw_slot(&self, slot: &AvailabilitySlot) -> Result<(), AvailabilityServiceError> {
        Ok(self.repository.withdraw(slot)?)
    }

    /// All slots a tutor has declared, across days.
    pub fn slots_for(
        &self,
        tutor: &TutorId,
    ) -> Result<Vec<AvailabilitySlot>, AvailabilityServiceError> {
        Ok(self.repository.slots_for(tutor)?)
    }
}

/// Error raised by the availability service.
#[derive(Debug, thiserror::Error)]
pub enum AvailabilityServiceError {
    #[error("slot must start before it ends (got {start}..{end})")]
    InvalidSlot { start: NaiveTime, end: NaiveTime },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
