//! Event sources -- where the reducer's events come from.
//!
//! The core only depends on [`EventSource::fetch_week_events`]. Storage
//! engines implement it; [`InMemoryEventSource`] implements it over a list of
//! records for tests and the CLI.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::event::{timestamp, weekday_of, Event, EventKind};
use crate::grid::week_end;
use crate::reducer::fold_order;

/// Supplies the events relevant to one week.
pub trait EventSource: Send + Sync {
    /// Fetch events for the week starting at `start`.
    ///
    /// Implementations must return every weekly-recurring opening regardless
    /// of its stored date, plus every event lying within
    /// `[start, start + 7 days)`. Events are sorted ascending by `starts_at`,
    /// openings before appointments on ties, and tagged with the weekday of
    /// their own `starts_at`.
    fn fetch_week_events(&self, start: NaiveDate) -> Result<Vec<Event>>;
}

impl<S: EventSource + ?Sized> EventSource for &S {
    fn fetch_week_events(&self, start: NaiveDate) -> Result<Vec<Event>> {
        (**self).fetch_week_events(start)
    }
}

/// A stored event, before weekday tagging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(with = "timestamp")]
    pub starts_at: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub ends_at: NaiveDateTime,
    pub kind: EventKind,
    #[serde(default)]
    pub weekly_recurring: bool,
}

impl EventRecord {
    /// A one-off opening.
    pub fn opening(id: i64, starts_at: NaiveDateTime, ends_at: NaiveDateTime) -> Self {
        Self {
            id,
            starts_at,
            ends_at,
            kind: EventKind::Opening,
            weekly_recurring: false,
        }
    }

    /// An opening repeating every week on the weekday of `starts_at`.
    pub fn recurring_opening(id: i64, starts_at: NaiveDateTime, ends_at: NaiveDateTime) -> Self {
        Self {
            weekly_recurring: true,
            ..Self::opening(id, starts_at, ends_at)
        }
    }

    pub fn appointment(id: i64, starts_at: NaiveDateTime, ends_at: NaiveDateTime) -> Self {
        Self {
            id,
            starts_at,
            ends_at,
            kind: EventKind::Appointment,
            weekly_recurring: false,
        }
    }

    pub fn is_recurring_opening(&self) -> bool {
        self.kind == EventKind::Opening && self.weekly_recurring
    }

    /// Whether the record lies entirely within `[window_start, window_end]`.
    pub fn falls_within(&self, window_start: NaiveDateTime, window_end: NaiveDateTime) -> bool {
        self.starts_at >= window_start && self.ends_at <= window_end
    }

    /// Tag the record with the weekday of its own start.
    pub fn to_event(&self) -> Event {
        Event {
            id: self.id,
            day_of_week: weekday_of(self.starts_at),
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            kind: self.kind,
            weekly_recurring: self.weekly_recurring,
        }
    }
}

/// Event source over an in-memory list of records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventSource {
    records: Vec<EventRecord>,
}

impl InMemoryEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<EventRecord>) -> Self {
        Self { records }
    }

    /// Load records from a JSON array.
    ///
    /// # Errors
    /// Returns `AvailabilityError::Source` if the JSON is malformed or a record
    /// has an unparseable timestamp or unknown kind.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<EventRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    pub fn insert(&mut self, record: EventRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl EventSource for InMemoryEventSource {
    fn fetch_week_events(&self, start: NaiveDate) -> Result<Vec<Event>> {
        let window_start = start.and_time(NaiveTime::MIN);
        let window_end = week_end(start)?.and_time(NaiveTime::MIN);

        let mut events: Vec<Event> = self
            .records
            .iter()
            .filter(|r| r.is_recurring_opening() || r.falls_within(window_start, window_end))
            .map(EventRecord::to_event)
            .collect();
        events.sort_by_key(fold_order);

        debug!(
            %start,
            stored = self.records.len(),
            selected = events.len(),
            "fetched week events"
        );
        Ok(events)
    }
}
