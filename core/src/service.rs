//! Flagday service
//!
//! Builds trackers from a validated config and owns one tokio task per
//! tracker. Each task waits for the next local midnight, recomputes its
//! tracker, publishes the fresh state, drains fired events into the host
//! sink, and re-arms itself. Tasks are aborted on shutdown.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::calendar;
use crate::events::EventSink;
use crate::state::StatePublisher;
use crate::tracking::{ConfigError, FlagdayConfig, FlagdayTracker};

/// Running flagday service.
///
/// Dropping the service aborts every tracker task; there is no outstanding
/// timer after teardown.
pub struct FlagdayService {
    tasks: Vec<JoinHandle<()>>,
}

impl FlagdayService {
    /// Validate `config` and bring up one tracker per enabled record.
    ///
    /// The initial recompute for every tracker runs before this returns,
    /// so state is published and zero-day events are delivered as part of
    /// setup. A malformed config fails the whole setup; no partial start.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(
        config: FlagdayConfig,
        publisher: Arc<dyn StatePublisher>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, ConfigError> {
        crate::tracking::config::validate(&config)?;

        let mut tasks = Vec::new();
        for definition in config.flagdays {
            if !definition.enabled {
                debug!(name = %definition.name, "skipping disabled flagday");
                continue;
            }

            let mut tracker = FlagdayTracker::new(definition);
            tick(&mut tracker, Local::now().date_naive(), &*publisher, &*sink);

            tasks.push(tokio::spawn(run_tracker(
                tracker,
                Arc::clone(&publisher),
                Arc::clone(&sink),
            )));
        }

        info!(trackers = tasks.len(), "flagday service started");
        Ok(Self { tasks })
    }

    /// Number of live tracker tasks
    pub fn tracker_count(&self) -> usize {
        self.tasks.len()
    }

    /// Tear the service down, cancelling every pending midnight timer
    pub fn shutdown(mut self) {
        self.abort_all();
    }

    fn abort_all(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

impl Drop for FlagdayService {
    fn drop(&mut self) {
        self.abort_all();
    }
}

/// Midnight loop for one tracker.
///
/// The tracker is owned by this task; a firing runs to completion before
/// the timer is re-armed, so recomputations for one tracker never overlap.
async fn run_tracker(
    mut tracker: FlagdayTracker,
    publisher: Arc<dyn StatePublisher>,
    sink: Arc<dyn EventSink>,
) {
    loop {
        let secs = calendar::seconds_until_next_midnight(Local::now().naive_local());
        tokio::time::sleep(Duration::from_secs(secs)).await;
        tick(&mut tracker, Local::now().date_naive(), &*publisher, &*sink);
    }
}

/// One firing: recompute, publish, drain events.
///
/// Host-side failures are logged and swallowed so the daily cycle always
/// re-arms.
fn tick(
    tracker: &mut FlagdayTracker,
    today: NaiveDate,
    publisher: &dyn StatePublisher,
    sink: &dyn EventSink,
) {
    tracker.recompute(today);

    if let Some(state) = tracker.entity_state() {
        debug!(
            entity_id = %state.entity_id,
            days_remaining = state.state,
            next = %flagdays_types::formatting::format_days_until(state.state, "today"),
            "recomputed flagday state"
        );
        if let Err(err) = publisher.publish_state(&state) {
            warn!(entity_id = %state.entity_id, %err, "failed to publish state");
        }
    }

    for event in tracker.take_fired_events() {
        if let Err(err) = sink.notify(event) {
            warn!(%err, "failed to deliver flagday event");
        }
    }
}
