use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for tutors offering availability.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TutorId(pub String);

/// Fixed seven-day enumeration shared by stored slots and booking queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    #[serde(rename = "MON")]
    Monday,
    #[serde(rename = "TUE")]
    Tuesday,
    #[serde(rename = "WED")]
    Wednesday,
    #[serde(rename = "THU")]
    Thursday,
    #[serde(rename = "FRI")]
    Friday,
    #[serde(rename = "SAT")]
    Saturday,
    #[serde(rename = "SUN")]
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Wire code matching the stored three-letter day choices.
    pub const fn code(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "MON",
            DayOfWeek::Tuesday => "TUE",
            DayOfWeek::Wednesday => "WED",
            DayOfWeek::Thursday => "THU",
            DayOfWeek::Friday => "FRI",
            DayOfWeek::Saturday => "SAT",
            DayOfWeek::Sunday => "SUN",
        }
    }

    /// Lenient parse. Unknown codes yield `None` so availability queries can
    /// degrade to an empty result instead of failing.
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "MON" => Some(DayOfWeek::Monday),
            "TUE" => Some(DayOfWeek::Tuesday),
            "WED" => Some(DayOfWeek::Wednesday),
            "THU" => Some(DayOfWeek::Thursday),
            "FRI" => Some(DayOfWeek::Friday),
            "SAT" => Some(DayOfWeek::Saturday),
            "SUN" => Some(DayOfWeek::Sunday),
            _ => None,
        }
    }
}

/// A contiguous time-of-day interval on one weekday during which a tutor
/// takes bookings.
///
/// Several slots per (tutor, day) are allowed; they need not be contiguous or
/// non-overlapping, and the matcher treats each one independently.
/// `start_time < end_time` is enforced when a slot is declared, never by the
/// matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub tutor_id: TutorId,
    pub day_of_week: DayOfWeek,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl AvailabilitySlot {
    /// Whether this slot encompasses the entire requested window.
    pub fn covers(&self, desired_start: NaiveTime, desired_end: NaiveTime) -> bool {
        self.start_time <= desired_start && self.end_time >= desired_end
    }
}
