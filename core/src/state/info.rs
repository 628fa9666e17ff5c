use serde::{Deserialize, Serialize};

/// Unit attached to the published day count.
pub const UNIT_OF_MEASUREMENT: &str = "days";

/// Extra attributes published alongside the entity state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityAttributes {
    /// The configured date, ISO formatted (year included as configured)
    pub date_of_flag: String,
    /// Years between the configured date and the upcoming occurrence
    pub age_at_next_flagday: i32,
}

/// Published snapshot of one flagday entity.
///
/// This is the contract handed to the host's state store; both sides use
/// this struct so the serialized shape cannot drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityState {
    /// `flagday.<slug(name)>`
    pub entity_id: String,
    /// `<entity_id>.<MMDD>`, stable across renames of other records
    pub unique_id: String,
    /// Days remaining until the next occurrence
    pub state: u32,
    pub unit_of_measurement: String,
    pub icon: String,
    pub attributes: EntityAttributes,
}
