pub mod grid;
pub mod month;

pub use grid::{build_month_grid, parse_timestamp, slot_day_and_hours, weeks, Day, HourRange};
pub use month::{
    first_of_month, month_label, shift_month, visible_days, CalendarState,
    WEEKDAY_LABELS,
};
