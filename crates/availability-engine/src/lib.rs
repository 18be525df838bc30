//! # availability-engine
//!
//! Resolve a week of free 30-minute booking slots from stored events.
//!
//! Two kinds of events feed the computation: *openings*, which offer bookable
//! time and may repeat every week on the same weekday, and *appointments*,
//! which consume part of an opening. For a query date the engine builds a
//! seven-day grid, adds each opening's slots to the date carrying its weekday,
//! removes each appointment's slots, and returns the remaining slot labels
//! keyed by `YYYY-MM-DD`.
//!
//! ## Quick start
//!
//! ```rust
//! use availability_engine::{get_availabilities_str, EventRecord, InMemoryEventSource};
//! use chrono::NaiveDateTime;
//!
//! let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
//! let source = InMemoryEventSource::from_records(vec![
//!     EventRecord::recurring_opening(1, at("2014-08-04 09:30"), at("2014-08-04 12:30")),
//!     EventRecord::appointment(2, at("2014-08-11 10:30"), at("2014-08-11 11:30")),
//! ]);
//!
//! let week = get_availabilities_str(&source, "2014-08-10").unwrap();
//! assert_eq!(week.len(), 7);
//! assert_eq!(week.get("2014-08-11").unwrap(), ["9:30", "10:00", "11:30", "12:00"]);
//! assert!(week.get("2014-08-12").unwrap().is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`slot`] — event time range → 30-minute slot labels
//! - [`grid`] — empty seven-day grid and insertion-ordered slot sets
//! - [`weekday`] — weekday index → concrete date in the grid
//! - [`reducer`] — fold openings and appointments into the grid
//! - [`format`] — grid → `YYYY-MM-DD`-keyed result
//! - [`source`] — the `EventSource` boundary and an in-memory implementation
//! - [`availability`] — the `get_availabilities` query
//! - [`event`] — event types
//! - [`error`] — error types

pub mod availability;
pub mod error;
pub mod event;
pub mod format;
pub mod grid;
pub mod reducer;
pub mod slot;
pub mod source;
pub mod weekday;

pub use availability::{get_availabilities, get_availabilities_str, parse_query_date};
pub use error::AvailabilityError;
pub use event::{Event, EventKind};
pub use format::{format_availabilities, Availabilities};
pub use grid::{build_weekly_grid, SlotSet, WeeklyGrid};
pub use reducer::{find_availabilities_from_events, reduce_events};
pub use slot::{tile_slots, Slot, SLOTS_PER_DAY, SLOT_MINUTES};
pub use source::{EventRecord, EventSource, InMemoryEventSource};
pub use weekday::WeekdayIndex;
