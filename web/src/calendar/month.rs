use chrono::{Datelike, Months, NaiveDate};

pub const WEEKDAY_LABELS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Moves `month` by `delta` whole months, landing on the 1st.
/// Out-of-range results leave the month unchanged.
pub fn shift_month(month: NaiveDate, delta: i32) -> NaiveDate {
    let first = first_of_month(month);
    let shifted = if delta >= 0 {
        first.checked_add_months(Months::new(delta.unsigned_abs()))
    } else {
        first.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(first)
}

pub fn days_in_month(month: NaiveDate) -> u32 {
    let first = first_of_month(month);
    let next = shift_month(first, 1);
    if next == first {
        // last representable month
        return 31;
    }
    next.signed_duration_since(first).num_days() as u32
}

/// "October 2026"
pub fn month_label(month: NaiveDate) -> String {
    month.format("%B %Y").to_string()
}

/// The month shown by the calendar, anchored to the real current date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    pub today: NaiveDate,
    pub displayed_month: NaiveDate,
}

impl CalendarState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            displayed_month: first_of_month(today),
        }
    }

    pub fn prev_month(&mut self) {
        self.displayed_month = shift_month(self.displayed_month, -1);
    }

    pub fn next_month(&mut self) {
        self.displayed_month = shift_month(self.displayed_month, 1);
    }

    pub fn label(&self) -> String {
        month_label(self.displayed_month)
    }

    pub fn days(&self, slots: &[shared_types::Slot]) -> Vec<super::Day> {
        super::build_month_grid(self.today, self.displayed_month, slots)
    }
}

/// Cells to render, or none until the viewer's own date is known.
pub fn visible_days(state: Option<CalendarState>, slots: &[shared_types::Slot]) -> Vec<super::Day> {
    state.map(|state| state.days(slots)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn shifting_crosses_year_boundaries() {
        assert_eq!(shift_month(date(2025, 12, 17), 1), date(2026, 1, 1));
        assert_eq!(shift_month(date(2025, 1, 31), -1), date(2024, 12, 1));
        assert_eq!(shift_month(date(2025, 3, 31), -13), date(2024, 2, 1));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(date(2024, 2, 10)), 29);
        assert_eq!(days_in_month(date(2025, 2, 10)), 28);
        assert_eq!(days_in_month(date(2025, 4, 1)), 30);
        assert_eq!(days_in_month(date(2025, 12, 1)), 31);
    }

    #[test]
    fn state_navigates_and_labels() {
        let mut state = CalendarState::new(date(2026, 10, 18));
        assert_eq!(state.displayed_month, date(2026, 10, 1));
        assert_eq!(state.label(), "October 2026");

        state.next_month();
        state.next_month();
        state.next_month();
        assert_eq!(state.label(), "January 2027");

        state.prev_month();
        assert_eq!(state.displayed_month, date(2026, 12, 1));
        assert_eq!(state.today, date(2026, 10, 18));
    }

    #[test]
    fn no_cells_until_the_local_date_is_known() {
        let slots = vec![shared_types::Slot {
            id: 1,
            start_time: "2026-10-18T09:00:00".into(),
            end_time: "2026-10-18T10:00:00".into(),
        }];
        assert!(visible_days(None, &slots).is_empty());

        let days = visible_days(Some(CalendarState::new(date(2026, 10, 18))), &slots);
        let focused: Vec<_> = days.iter().filter(|d| d.is_focus).map(|d| d.date).collect();
        assert_eq!(focused, vec![date(2026, 10, 18)]);
    }
}
