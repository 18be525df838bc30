//! Weekly availability queries.
//!
//! Validates the query date, fetches the week's events from an
//! [`EventSource`], folds them into a [`WeeklyGrid`](crate::grid::WeeklyGrid)
//! and formats the result.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{AvailabilityError, Result};
use crate::event::timestamp;
use crate::format::{format_availabilities, Availabilities, DATE_FORMAT};
use crate::grid::{build_weekly_grid, week_end};
use crate::reducer::reduce_events;
use crate::source::EventSource;

/// Free slots for each of the seven dates starting at `date`.
///
/// The date range is validated before the source is queried, so an invalid
/// week never triggers a fetch.
///
/// # Errors
/// Returns `AvailabilityError::InvalidDate` if the week is not representable,
/// or whatever error the source reports.
pub fn get_availabilities<S: EventSource + ?Sized>(
    source: &S,
    date: NaiveDate,
) -> Result<Availabilities> {
    let grid = build_weekly_grid(date)?;
    week_end(date)?;

    let events = source.fetch_week_events(date)?;
    debug!(%date, events = events.len(), "resolving weekly availability");

    let grid = reduce_events(grid, &events);
    Ok(format_availabilities(&grid))
}

/// Like [`get_availabilities`], for a date given as text.
///
/// # Errors
/// Returns `AvailabilityError::InvalidDate` if `date` does not parse (see
/// [`parse_query_date`]); the source is not queried in that case.
pub fn get_availabilities_str<S: EventSource + ?Sized>(
    source: &S,
    date: &str,
) -> Result<Availabilities> {
    let date = parse_query_date(date)?;
    get_availabilities(source, date)
}

/// Parse a query date.
///
/// Accepts `YYYY-MM-DD`, or a timestamp in any layout the event records
/// accept, in which case the time of day is dropped.
///
/// # Errors
/// Returns `AvailabilityError::InvalidDate` for anything else, including
/// impossible dates such as `2014-02-30`.
pub fn parse_query_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .ok()
        .or_else(|| timestamp::parse(trimmed).map(|at| at.date()))
        .ok_or_else(|| AvailabilityError::InvalidDate(raw.to_string()))
}
