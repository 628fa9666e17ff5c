pub mod handler;
pub mod signal;

pub use handler::EventSink;
pub use signal::{FLAGDAY_EVENT_TYPE, FlagdayEvent};
