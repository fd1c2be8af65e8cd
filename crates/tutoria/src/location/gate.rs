use super::domain::{LocationDecision, LocationError, LocationFix};
use crate::geo::haversine_km;

const DEFAULT_CONFIRMATION_RADIUS_KM: f64 = 0.2;

/// Policy dial backing the gate; the confirmation radius defaults to 200
/// meters.
#[derive(Debug, Clone)]
pub struct GatePolicy {
    confirmation_radius_km: f64,
}

impl GatePolicy {
    pub fn new(confirmation_radius_km: f64) -> Self {
        let sanitized = if confirmation_radius_km.is_finite() && confirmation_radius_km > 0.0 {
            confirmation_radius_km
        } else {
            DEFAULT_CONFIRMATION_RADIUS_KM
        };

        Self {
            confirmation_radius_km: sanitized,
        }
    }

    pub fn confirmation_radius_km(&self) -> f64 {
        self.confirmation_radius_km
    }
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIRMATION_RADIUS_KM)
    }
}

/// Decision engine for stored-location updates.
///
/// Holds no state between calls and never mutates anything itself; the
/// `Accepted` variant names the string the caller should persist.
#[derive(Debug, Clone, Default)]
pub struct DistanceGate {
    policy: GatePolicy,
}

impl DistanceGate {
    pub fn with_policy(policy: GatePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &GatePolicy {
        &self.policy
    }

    /// Decide what to do with `candidate` given the currently stored location.
    ///
    /// With no previous location the candidate is accepted unconditionally.
    /// Otherwise a move at or beyond the confirmation radius requires the
    /// `force_update` flag; a confirmed update stores the candidate even when
    /// the move is small.
    pub fn evaluate(
        &self,
        previous: Option<&str>,
        candidate: &str,
        force_update: bool,
    ) -> Result<LocationDecision, LocationError> {
        let candidate_fix = LocationFix::parse(candidate)?;

        let Some(previous) = previous else {
            return Ok(LocationDecision::Accepted {
                stored: candidate.to_string(),
            });
        };
        let previous_fix = LocationFix::parse(previous)?;

        let distance_km = haversine_km(previous_fix.point(), candidate_fix.point());
        if distance_km >= self.policy.confirmation_radius_km && !force_update {
            return Ok(LocationDecision::NeedsConfirmation {
                distance_km: round_to_millis(distance_km),
            });
        }

        if force_update {
            return Ok(LocationDecision::Accepted {
                stored: candidate.to_string(),
            });
        }

        Ok(LocationDecision::Unchanged)
    }
}

fn round_to_millis(distance_km: f64) -> f64 {
    (distance_km * 1000.0).round() / 1000.0
}
