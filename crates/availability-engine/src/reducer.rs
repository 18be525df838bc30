//! Availability reduction -- folds events into a weekly grid.
//!
//! Openings add their slots to the bucket for their weekday; appointments
//! remove theirs. Events are applied in `starts_at` order so an appointment
//! always sees the openings that precede it.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{trace, warn};

use crate::error::Result;
use crate::event::{Event, EventKind};
use crate::grid::{build_weekly_grid, WeeklyGrid};
use crate::slot::tile_slots;
use crate::weekday::WeekdayIndex;

/// Apply `events` to `grid` and return the populated grid.
///
/// Events are sorted by start time before folding. On equal start times
/// openings come before appointments, so a booking always sees the opening it
/// consumes. The input slice is not modified. Events with a weekday index
/// outside 0..=6 are skipped.
pub fn reduce_events(mut grid: WeeklyGrid, events: &[Event]) -> WeeklyGrid {
    let index = WeekdayIndex::from_grid(&grid);

    let mut ordered: Vec<&Event> = events.iter().collect();
    ordered.sort_by_key(|event| fold_order(event));

    for event in ordered {
        let Some(date) = index.resolve(event.day_of_week) else {
            warn!(
                event_id = event.id,
                day_of_week = event.day_of_week,
                "skipping event with out-of-range weekday"
            );
            continue;
        };
        let Some(bucket) = grid.slots_mut(date) else {
            continue;
        };

        let slots = tile_slots(event.starts_at, event.ends_at);
        match event.kind {
            EventKind::Opening => bucket.union(slots.iter().cloned()),
            EventKind::Appointment => bucket.subtract(&slots),
        }

        trace!(
            event_id = event.id,
            kind = ?event.kind,
            %date,
            slots = slots.len(),
            remaining = bucket.len(),
            "applied event"
        );
    }

    grid
}

/// Sort key applying events chronologically, openings first on ties.
pub fn fold_order(event: &Event) -> (NaiveDateTime, bool) {
    (event.starts_at, event.kind == EventKind::Appointment)
}

/// Build a fresh grid for the week starting at `start` and fold `events` into it.
///
/// # Errors
/// Returns `AvailabilityError::InvalidDate` if the week is not representable.
pub fn find_availabilities_from_events(start: NaiveDate, events: &[Event]) -> Result<WeeklyGrid> {
    let grid = build_weekly_grid(start)?;
    Ok(reduce_events(grid, events))
}
