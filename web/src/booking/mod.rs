pub mod selections;
pub mod submission;

pub use selections::ConfirmedSelections;
pub use submission::{
    apply_outcomes, build_appointment_requests, describe_confirmations, prepare_submission,
    BatchReport, PendingAppointment,
};
