//! Day-of-week resolution -- maps a weekday index to its date in the grid.

use chrono::{Datelike, NaiveDate};

use crate::grid::WeeklyGrid;

/// Lookup from weekday index (0 = Sunday .. 6 = Saturday) to the grid date
/// falling on that weekday.
///
/// A grid spans seven consecutive dates, so every index maps to exactly one
/// date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayIndex {
    dates: [NaiveDate; 7],
}

impl WeekdayIndex {
    pub fn from_grid(grid: &WeeklyGrid) -> Self {
        let mut dates = [grid.start(); 7];
        for date in grid.dates() {
            dates[weekday_number(date) as usize] = date;
        }
        Self { dates }
    }

    /// Date carrying weekday `day_of_week`, or `None` outside 0..=6.
    pub fn resolve(&self, day_of_week: u8) -> Option<NaiveDate> {
        self.dates.get(day_of_week as usize).copied()
    }
}

/// Weekday index of a date, 0 = Sunday through 6 = Saturday.
pub fn weekday_number(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}
