use std::collections::HashMap;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use shared_types::Slot;

use super::month::{days_in_month, first_of_month};
use crate::error::BookingError;

/// An "HH:MM" to "HH:MM" range offered on a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourRange {
    pub start: String,
    pub end: String,
}

impl HourRange {
    /// "09:00-10:00", the form selections are stored and matched in.
    pub fn label(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

/// One cell of the month grid. Recomputed whenever the month or the slot set changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub date: NaiveDate,
    pub number: u32,
    pub is_active: bool,
    pub is_focus: bool,
    pub is_current_month: bool,
    pub is_available: bool,
    pub available_hours: Vec<HourRange>,
}

impl Day {
    pub fn is_selectable(&self) -> bool {
        self.is_available && self.is_active
    }

    pub fn css_class(&self) -> String {
        let mut classes = vec!["day"];
        if self.is_active {
            classes.push("active");
        }
        if self.is_focus {
            classes.push("focus");
        }
        if !self.is_current_month {
            classes.push("outside-month");
        }
        if self.is_available {
            classes.push("available");
        }
        classes.join(" ")
    }
}

/// Parses a backend timestamp, keeping the wall-clock time as written.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, BookingError> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Ok(with_offset.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .map_err(|_| BookingError::InvalidTimestamp(raw.to_string()))
}

/// Calendar date and hour range of a slot.
pub fn slot_day_and_hours(slot: &Slot) -> Result<(NaiveDate, HourRange), BookingError> {
    let start = parse_timestamp(&slot.start_time)?;
    let end = parse_timestamp(&slot.end_time)?;
    Ok((
        start.date(),
        HourRange {
            start: start.format("%H:%M").to_string(),
            end: end.format("%H:%M").to_string(),
        },
    ))
}

fn hours_by_date(slots: &[Slot]) -> HashMap<NaiveDate, Vec<HourRange>> {
    let mut grouped: HashMap<NaiveDate, Vec<HourRange>> = HashMap::new();
    for slot in slots {
        match slot_day_and_hours(slot) {
            Ok((date, hours)) => grouped.entry(date).or_default().push(hours),
            Err(e) => leptos::logging::warn!("Skipping slot {}: {}", slot.id, e),
        }
    }
    grouped
}

/// Builds the 7-column grid for `displayed_month`: trailing days of the
/// previous month up to the first weekday (Sunday first), every day of the
/// month, then leading days of the next month to complete the last week.
pub fn build_month_grid(today: NaiveDate, displayed_month: NaiveDate, slots: &[Slot]) -> Vec<Day> {
    let first = first_of_month(displayed_month);
    let leading = first.weekday().num_days_from_sunday() as usize;
    let visible = leading + days_in_month(first) as usize;
    let trailing = (7 - visible % 7) % 7;

    let hours = hours_by_date(slots);
    let grid_start = first
        .checked_sub_days(chrono::Days::new(leading as u64))
        .unwrap_or(first);

    grid_start
        .iter_days()
        .take(visible + trailing)
        .map(|date| {
            let available_hours = hours.get(&date).cloned().unwrap_or_default();
            Day {
                date,
                number: date.day(),
                is_active: date >= today,
                is_focus: date == today,
                is_current_month: date.month() == first.month() && date.year() == first.year(),
                is_available: !available_hours.is_empty(),
                available_hours,
            }
        })
        .collect()
}

/// Splits the grid into rows of seven.
pub fn weeks(days: &[Day]) -> Vec<Vec<Day>> {
    days.chunks(7).map(|week| week.to_vec()).collect()
}
