//! The weekly grid -- seven consecutive dates, each holding a set of free slots.
//!
//! Slot sets keep insertion order in a plain `Vec` so the formatted output
//! lists openings chronologically without depending on an ordered-set crate.

use chrono::{Days, NaiveDate};

use crate::error::{AvailabilityError, Result};
use crate::slot::Slot;

/// Number of dates in a weekly grid.
pub const DAYS_PER_WEEK: u64 = 7;

/// Duplicate-free collection of slots, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotSet {
    slots: Vec<Slot>,
}

impl SlotSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a slot unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, slot: Slot) -> bool {
        if self.slots.contains(&slot) {
            return false;
        }
        self.slots.push(slot);
        true
    }

    /// Add every slot not already present, keeping first-seen order.
    pub fn union<I: IntoIterator<Item = Slot>>(&mut self, slots: I) {
        for slot in slots {
            self.insert(slot);
        }
    }

    /// Remove every slot that appears in `slots`. Absent slots are ignored.
    pub fn subtract(&mut self, slots: &[Slot]) {
        self.slots.retain(|slot| !slots.contains(slot));
    }

    pub fn contains(&self, slot: &Slot) -> bool {
        self.slots.contains(slot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    pub fn as_slice(&self) -> &[Slot] {
        &self.slots
    }

    pub fn into_vec(self) -> Vec<Slot> {
        self.slots
    }
}

/// Per-query working set: one [`SlotSet`] for each of seven consecutive dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyGrid {
    start: NaiveDate,
    days: Vec<(NaiveDate, SlotSet)>,
}

impl WeeklyGrid {
    /// First date of the grid.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Grid dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().map(|(date, _)| *date)
    }

    pub fn slots(&self, date: NaiveDate) -> Option<&SlotSet> {
        self.position(date).map(|i| &self.days[i].1)
    }

    pub fn slots_mut(&mut self, date: NaiveDate) -> Option<&mut SlotSet> {
        self.position(date).map(move |i| &mut self.days[i].1)
    }

    /// `(date, slots)` pairs in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &SlotSet)> {
        self.days.iter().map(|(date, slots)| (*date, slots))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn into_days(self) -> Vec<(NaiveDate, SlotSet)> {
        self.days
    }

    // Dates are consecutive, so the offset from `start` is the index.
    fn position(&self, date: NaiveDate) -> Option<usize> {
        let offset = date.signed_duration_since(self.start).num_days();
        usize::try_from(offset).ok().filter(|&i| i < self.days.len())
    }
}

/// Build an empty grid for `start` and the six following dates.
///
/// # Errors
/// Returns `AvailabilityError::InvalidDate` if the week runs past the last
/// representable calendar date.
pub fn build_weekly_grid(start: NaiveDate) -> Result<WeeklyGrid> {
    let days = (0..DAYS_PER_WEEK)
        .map(|offset| {
            start
                .checked_add_days(Days::new(offset))
                .map(|date| (date, SlotSet::new()))
                .ok_or_else(|| out_of_range(start))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(WeeklyGrid { start, days })
}

/// Exclusive end of the week starting at `start` (`start + 7 days`).
///
/// # Errors
/// Returns `AvailabilityError::InvalidDate` if that date is not representable.
pub fn week_end(start: NaiveDate) -> Result<NaiveDate> {
    start
        .checked_add_days(Days::new(DAYS_PER_WEEK))
        .ok_or_else(|| out_of_range(start))
}

fn out_of_range(start: NaiveDate) -> AvailabilityError {
    AvailabilityError::InvalidDate(format!("week starting {} is out of calendar range", start))
}
