use serde::{Deserialize, Serialize};

/// Event type name used on the host bus.
pub const FLAGDAY_EVENT_TYPE: &str = "flagday";

/// Domain events emitted by flagday trackers.
/// These represent "a tracked day arrived" at a higher level than the
/// per-day state republishing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagdayEvent {
    /// The anniversary recurs today. Fired once per occurrence, on the
    /// midnight recompute that lands the day count on zero.
    FlagdayReached {
        /// Configured display name of the record
        name: String,
        /// Years since the configured date
        age: i32,
    },
}

impl FlagdayEvent {
    /// Bus event type for this event.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::FlagdayReached { .. } => FLAGDAY_EVENT_TYPE,
        }
    }
}
