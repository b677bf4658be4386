pub mod notice;

pub use notice::{ErrorNotice, InfoNotice, LoadingNotice};
