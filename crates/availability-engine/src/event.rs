//! Event records as delivered by an [`EventSource`](crate::source::EventSource).
//!
//! Two kinds exist: openings add bookable time, appointments consume it. An
//! event carries the weekday it applies to so that recurring openings can be
//! placed into any week without knowing their stored calendar date.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::weekday::weekday_number;

/// Discriminates availability-adding events from availability-consuming ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Bookable time offered by the provider, optionally repeating every week.
    Opening,
    /// A booking that consumes part of an opening.
    Appointment,
}

/// A fetched event, tagged with the weekday it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Storage identifier. Not used by availability resolution.
    pub id: i64,
    /// Weekday index, 0 = Sunday through 6 = Saturday.
    pub day_of_week: u8,
    /// Inclusive start of the event.
    pub starts_at: NaiveDateTime,
    /// Exclusive end of the event.
    pub ends_at: NaiveDateTime,
    pub kind: EventKind,
    /// Only meaningful for openings.
    pub weekly_recurring: bool,
}

/// Weekday index of a timestamp, 0 = Sunday through 6 = Saturday.
pub fn weekday_of(at: NaiveDateTime) -> u8 {
    weekday_number(at.date())
}

/// Serde adapter for naive timestamps.
///
/// Accepts `YYYY-MM-DDTHH:MM[:SS]` and `YYYY-MM-DD HH:MM[:SS]`; always writes
/// `YYYY-MM-DDTHH:MM:SS`.
pub mod timestamp {
    use chrono::NaiveDateTime;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    const CANONICAL: &str = "%Y-%m-%dT%H:%M:%S";

    const ACCEPTED: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];

    /// Parse a timestamp in any of the accepted layouts.
    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        ACCEPTED
            .iter()
            .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
    }

    pub fn serialize<S: Serializer>(
        value: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(CANONICAL))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp '{}'", raw)))
    }
}

