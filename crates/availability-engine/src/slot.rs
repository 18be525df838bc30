//! Slot tiling -- turns an event's time range into 30-minute slot labels.
//!
//! A slot is identified only by its start time of day (`9:00`, `13:30`). It
//! has no date; the date comes from the grid bucket that holds it.

use std::fmt;

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Width of every slot, in minutes.
pub const SLOT_MINUTES: i64 = 30;

/// Number of distinct slot labels in a day.
pub const SLOTS_PER_DAY: i64 = 24 * 60 / SLOT_MINUTES;

/// A fixed-size window labelled by its start time of day, formatted `H:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slot(String);

impl Slot {
    /// The slot starting at `time`. Seconds are ignored.
    pub fn at(time: NaiveTime) -> Self {
        Slot(format!("{}:{:02}", time.hour(), time.minute()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slot> for String {
    fn from(slot: Slot) -> Self {
        slot.0
    }
}

/// Tile `[start, end)` into consecutive slot labels.
///
/// Emits `floor((end - start) / SLOT_MINUTES)` labels, starting at `start`.
/// The label for `end` itself is never produced. Empty and inverted ranges
/// produce no slots. Crossing midnight wraps the time of day (`23:30` is
/// followed by `0:00`).
///
/// Labels repeat after one day, so ranges longer than a day stop at
/// [`SLOTS_PER_DAY`] labels.
pub fn tile_slots(start: NaiveDateTime, end: NaiveDateTime) -> Vec<Slot> {
    let count = ((end - start).num_minutes() / SLOT_MINUTES).min(SLOTS_PER_DAY);
    if count <= 0 {
        return Vec::new();
    }

    let unit = Duration::minutes(SLOT_MINUTES);
    let mut cursor = start.time();
    let mut slots = Vec::new();
    for _ in 0..count {
        slots.push(Slot::at(cursor));
        cursor = cursor.overflowing_add_signed(unit).0;
    }
    slots
}

