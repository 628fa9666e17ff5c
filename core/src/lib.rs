pub mod calendar;
pub mod events;
pub mod service;
pub mod state;
pub mod tracking;

// Re-exports for convenience
pub use events::{EventSink, FLAGDAY_EVENT_TYPE, FlagdayEvent};
pub use service::FlagdayService;
pub use state::{EntityAttributes, EntityState, StatePublisher};
pub use tracking::{ConfigError, FlagdayConfig, FlagdayDefinition, FlagdayTracker};
