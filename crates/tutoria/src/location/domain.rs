use serde::Serialize;

use crate::geo::GeoPoint;

/// A parsed `lat,lon,accuracy` triple as reported by a client device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationFix {
    pub latitude: f64,
    pub longitude: f64,
    /// Reported accuracy radius in meters. Carried on the record, never part
    /// of the distance computation.
    pub accuracy_m: f64,
}

impl LocationFix {
    /// Parse the comma-separated wire/storage representation.
    pub fn parse(raw: &str) -> Result<Self, LocationError> {
        let fields: Vec<&str> = raw.split(',').collect();
        if fields.len() != 3 {
            return Err(LocationError::MalformedLocation {
                raw: raw.to_string(),
                reason: format!("expected 3 comma-separated fields, found {}", fields.len()),
            });
        }

        let mut values = [0.0f64; 3];
        for (value, field) in values.iter_mut().zip(&fields) {
            *value = field
                .trim()
                .parse::<f64>()
                .map_err(|_| LocationError::MalformedLocation {
                    raw: raw.to_string(),
                    reason: format!("field '{}' is not numeric", field.trim()),
                })?;
        }

        Ok(Self {
            latitude: values[0],
            longitude: values[1],
            accuracy_m: values[2],
        })
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Outcome of evaluating a candidate location against the stored one.
///
/// `NeedsConfirmation` is a legitimate decision, not an error; validation
/// failures are [`LocationError`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LocationDecision {
    /// The candidate becomes the stored location.
    Accepted { stored: String },
    /// The move is large enough to require explicit confirmation; nothing was
    /// persisted. Carries the computed distance rounded to 3 decimals so the
    /// caller can resubmit with the update flag set.
    NeedsConfirmation { distance_km: f64 },
    /// The candidate is within the confirmation radius; nothing was persisted.
    Unchanged,
}

/// Caller-correctable validation failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocationError {
    #[error("malformed location '{raw}': {reason}")]
    MalformedLocation { raw: String, reason: String },
    #[error("candidate location is required")]
    MissingLocation,
}
