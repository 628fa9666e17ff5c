//! Flagday definition types
//!
//! Definitions are the config-facing records describing which annual
//! dates to track. One `FlagdayTracker` is created per enabled definition.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Icon used when a record does not set one.
pub const DEFAULT_ICON: &str = "mdi:flag-outline";

/// A configured annual flag day (loaded from config)
///
/// The recurrence is defined by the month/day of `date_of_flag`; the year
/// component only feeds the `age_at_next_flagday` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagdayDefinition {
    /// Display name, also the basis for the entity id
    pub name: String,

    /// The anniversary date (`YYYY-MM-DD`)
    pub date_of_flag: NaiveDate,

    /// Display icon hint
    #[serde(default = "default_icon")]
    pub icon: String,

    /// Whether a tracker is spawned for this record
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl FlagdayDefinition {
    /// Recurring month (1-12)
    pub fn month(&self) -> u32 {
        self.date_of_flag.month()
    }

    /// Recurring day of month (1-31)
    pub fn day(&self) -> u32 {
        self.date_of_flag.day()
    }

    /// Deterministic entity id: `flagday.<slug(name)>`
    pub fn entity_id(&self) -> String {
        flagdays_types::identity::entity_id(&self.name)
    }

    /// Stable unique id: `<entity_id>.<MMDD>`
    pub fn unique_id(&self) -> String {
        flagdays_types::identity::unique_id(&self.name, self.month(), self.day())
    }
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

fn default_true() -> bool {
    true
}

/// Root structure for a flagday config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlagdayConfig {
    /// Flagday records, in input order
    #[serde(default, rename = "flagday")]
    pub flagdays: Vec<FlagdayDefinition>,
}
