//! Tests for the weekly grid, slot sets, and weekday resolution.

use availability_engine::grid::week_end;
use availability_engine::weekday::weekday_number;
use availability_engine::{build_weekly_grid, AvailabilityError, Slot, SlotSet, WeekdayIndex};
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn slot(h: u32, m: u32) -> Slot {
    Slot::at(NaiveTime::from_hms_opt(h, m, 0).unwrap())
}

// ── Weekly grid ─────────────────────────────────────────────────────────────

#[test]
fn grid_has_seven_consecutive_empty_dates() {
    let grid = build_weekly_grid(date(2014, 8, 10)).unwrap();

    let dates: Vec<NaiveDate> = grid.dates().collect();
    let expected: Vec<NaiveDate> = (10..=16).map(|d| date(2014, 8, d)).collect();
    assert_eq!(dates, expected);
    assert_eq!(grid.len(), 7);
    assert_eq!(grid.start(), date(2014, 8, 10));
    assert!(grid.iter().all(|(_, slots)| slots.is_empty()));
}

#[test]
fn grid_spans_month_and_year_boundaries() {
    let grid = build_weekly_grid(date(2014, 12, 29)).unwrap();
    let dates: Vec<NaiveDate> = grid.dates().collect();
    assert_eq!(dates.first(), Some(&date(2014, 12, 29)));
    assert_eq!(dates.last(), Some(&date(2015, 1, 4)));
}

#[test]
fn grid_lookup_is_limited_to_its_week() {
    let mut grid = build_weekly_grid(date(2014, 8, 10)).unwrap();
    assert!(grid.slots(date(2014, 8, 16)).is_some());
    assert!(grid.slots(date(2014, 8, 17)).is_none());
    assert!(grid.slots(date(2014, 8, 9)).is_none());

    grid.slots_mut(date(2014, 8, 12)).unwrap().insert(slot(9, 0));
    assert_eq!(grid.slots(date(2014, 8, 12)).unwrap().len(), 1);
}

#[test]
fn grid_at_end_of_calendar_is_invalid_date() {
    let err = build_weekly_grid(NaiveDate::MAX).unwrap_err();
    assert!(matches!(err, AvailabilityError::InvalidDate(_)));

    let err = week_end(NaiveDate::MAX).unwrap_err();
    assert!(matches!(err, AvailabilityError::InvalidDate(_)));
}

// ── Slot set ────────────────────────────────────────────────────────────────

#[test]
fn slot_set_deduplicates_and_keeps_insertion_order() {
    let mut set = SlotSet::new();
    set.union(vec![slot(10, 0), slot(9, 0), slot(10, 0)]);
    assert!(!set.insert(slot(9, 0)));
    assert!(set.insert(slot(8, 30)));

    let labels: Vec<&str> = set.iter().map(Slot::as_str).collect();
    assert_eq!(labels, ["10:00", "9:00", "8:30"]);
}

#[test]
fn slot_set_subtract_ignores_absent_slots() {
    let mut set = SlotSet::new();
    set.union(vec![slot(9, 0), slot(9, 30), slot(10, 0)]);
    set.subtract(&[slot(9, 30), slot(14, 0)]);

    assert_eq!(set.as_slice(), &[slot(9, 0), slot(10, 0)]);
    assert!(!set.contains(&slot(9, 30)));
}

// ── Weekday resolution ──────────────────────────────────────────────────────

#[test]
fn weekday_index_maps_every_day_within_the_week() {
    // Starts on a Wednesday, so Sunday and Monday fall in the following week.
    let start = date(2014, 8, 13);
    let grid = build_weekly_grid(start).unwrap();
    let index = WeekdayIndex::from_grid(&grid);

    assert_eq!(index.resolve(0), Some(date(2014, 8, 17)));
    assert_eq!(index.resolve(1), Some(date(2014, 8, 18)));
    assert_eq!(index.resolve(3), Some(date(2014, 8, 13)));
    assert_eq!(index.resolve(6), Some(date(2014, 8, 16)));

    for day in 0..7u8 {
        let resolved = index.resolve(day).unwrap();
        assert_eq!(weekday_number(resolved), day);
        assert!(grid.slots(resolved).is_some());
    }
}

#[test]
fn weekday_index_rejects_out_of_range_days() {
    let grid = build_weekly_grid(date(2014, 8, 10)).unwrap();
    let index = WeekdayIndex::from_grid(&grid);
    assert_eq!(index.resolve(7), None);
    assert_eq!(index.resolve(u8::MAX), None);
}

#[test]
fn tuesday_of_a_sunday_week() {
    let grid = build_weekly_grid(date(2014, 8, 10)).unwrap();
    let tuesday = WeekdayIndex::from_grid(&grid).resolve(2).unwrap();
    assert_eq!(tuesday, date(2014, 8, 12));
    assert_eq!(tuesday.weekday(), Weekday::Tue);
}
