//! Flagday tracker
//!
//! One tracker per enabled definition. Holds the day-count state recomputed
//! once per local day and queues domain events for the service to drain.

use chrono::NaiveDate;

use crate::calendar;
use crate::events::FlagdayEvent;
use crate::state::{EntityAttributes, EntityState, UNIT_OF_MEASUREMENT};

use super::definitions::FlagdayDefinition;

/// Per-record runtime state for one flag day.
///
/// State is unset until the first [`recompute`](Self::recompute); the
/// entity stays hidden until then. After a recompute at the start of local
/// day D, `days_remaining() == Some(0)` exactly when D is the observed
/// anniversary, and the value holds until the next recompute.
#[derive(Debug, Clone)]
pub struct FlagdayTracker {
    definition: FlagdayDefinition,

    /// Days until the next occurrence; `None` before the first recompute
    days_remaining: Option<u32>,

    /// Years between the configured date and the upcoming occurrence
    age_at_next_flagday: i32,

    /// Events fired by recomputes, drained by the service
    fired_events: Vec<FlagdayEvent>,
}

impl FlagdayTracker {
    pub fn new(definition: FlagdayDefinition) -> Self {
        Self {
            definition,
            days_remaining: None,
            age_at_next_flagday: 0,
            fired_events: Vec::new(),
        }
    }

    pub fn definition(&self) -> &FlagdayDefinition {
        &self.definition
    }

    pub fn days_remaining(&self) -> Option<u32> {
        self.days_remaining
    }

    pub fn age_at_next_flagday(&self) -> i32 {
        self.age_at_next_flagday
    }

    /// Entity is hidden until the first recompute has produced a state
    pub fn is_hidden(&self) -> bool {
        self.days_remaining.is_none()
    }

    /// Recompute the day count as of the start of local day `today`.
    ///
    /// Queues a [`FlagdayEvent::FlagdayReached`] when the count lands on
    /// zero. Recomputes run once per local day, so the zero-day recompute
    /// is the only firing for an occurrence.
    pub fn recompute(&mut self, today: NaiveDate) {
        let anniversary = self.definition.date_of_flag;
        let next = calendar::next_occurrence(today, anniversary);
        let days = calendar::days_until(today, next);

        self.age_at_next_flagday = calendar::age_at_next(next, anniversary);
        self.days_remaining = Some(days);

        if days == 0 {
            self.fired_events.push(FlagdayEvent::FlagdayReached {
                name: self.definition.name.clone(),
                age: self.age_at_next_flagday,
            });
        }
    }

    /// Take any fired events (drains the queue)
    pub fn take_fired_events(&mut self) -> Vec<FlagdayEvent> {
        std::mem::take(&mut self.fired_events)
    }

    /// Published snapshot of this tracker, `None` before the first recompute
    pub fn entity_state(&self) -> Option<EntityState> {
        let days_remaining = self.days_remaining?;

        Some(EntityState {
            entity_id: self.definition.entity_id(),
            unique_id: self.definition.unique_id(),
            state: days_remaining,
            unit_of_measurement: UNIT_OF_MEASUREMENT.to_string(),
            icon: self.definition.icon.clone(),
            attributes: EntityAttributes {
                date_of_flag: self.definition.date_of_flag.to_string(),
                age_at_next_flagday: self.age_at_next_flagday,
            },
        })
    }
}
