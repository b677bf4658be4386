pub mod appointment_calendar;
pub mod calendar_grid;
pub mod search_form;
pub mod slot_popup;
pub mod submit_panel;

pub use appointment_calendar::AppointmentCalendar;
pub use calendar_grid::CalendarGrid;
pub use search_form::SearchForm;
pub use slot_popup::SlotPopup;
pub use submit_panel::SubmitPanel;
