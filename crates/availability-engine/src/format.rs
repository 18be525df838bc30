//! Result formatting -- weekly grid to a `YYYY-MM-DD`-keyed map of slot labels.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::grid::WeeklyGrid;

/// Layout of the date keys in [`Availabilities`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Free slot labels per date for one week.
///
/// Keys are `YYYY-MM-DD`, which sort in calendar order. Each value lists slots
/// in the order they were opened. Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Availabilities(BTreeMap<String, Vec<String>>);

impl Availabilities {
    /// Slots for a `YYYY-MM-DD` date, or `None` if the date is not in the week.
    pub fn get(&self, date: &str) -> Option<&[String]> {
        self.0.get(date).map(Vec::as_slice)
    }

    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(date, slots)| (date.as_str(), slots.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of free slots across the week.
    pub fn total_slots(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

/// Render every grid date, including empty ones, as a `YYYY-MM-DD` key.
pub fn format_availabilities(grid: &WeeklyGrid) -> Availabilities {
    let map = grid
        .iter()
        .map(|(date, slots)| {
            let labels: Vec<String> = slots
                .iter()
                .map(|slot| slot.as_str().to_string())
                .collect();
            (date.format(DATE_FORMAT).to_string(), labels)
        })
        .collect();
    Availabilities(map)
}
