pub mod info;

pub use info::{EntityAttributes, EntityState, UNIT_OF_MEASUREMENT};

/// Capability for pushing entity state into the host's state store.
///
/// Registration, persistence and entity lifecycle stay on the host side;
/// the service only ever pushes fresh snapshots through this trait.
pub trait StatePublisher: Send + Sync {
    fn publish_state(&self, state: &EntityState) -> Result<(), String>;
}
