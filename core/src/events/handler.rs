use super::signal::FlagdayEvent;

/// Capability for delivering domain events to the host event bus.
///
/// Handed to the service at construction rather than reached through a
/// global, so tests can substitute a recording sink. Delivery failures are
/// the host's problem; the service logs them and never retries.
pub trait EventSink: Send + Sync {
    fn notify(&self, event: FlagdayEvent) -> Result<(), String>;
}
