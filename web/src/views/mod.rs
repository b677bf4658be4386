pub mod appointment_calendar;
pub mod not_found;
