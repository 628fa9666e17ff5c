//! Flagday tracking system
//!
//! This module provides:
//! - **Definitions**: Config records describing which annual dates to track
//! - **Config**: TOML loading and whole-file validation
//! - **Tracker**: Per-record runtime state, recomputed once per local day
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │               Definition (TOML config)                 │
//! │  "Track 'Founding Day' on 03-15, icon mdi:flag"        │
//! └────────────────────────────────────────────────────────┘
//!                          │
//!              recompute at each local midnight
//!                          │
//!                          ▼
//! ┌────────────────────────────────────────────────────────┐
//! │             FlagdayTracker (runtime state)             │
//! │  "flagday.founding_day: 12 days remaining, age 34"     │
//! └────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//!            StatePublisher / EventSink (host)
//! ```

pub mod config;
mod definitions;
pub mod tracker;


pub use config::{ConfigError, default_config_path, load_file, load_str, save_file};
pub use definitions::{DEFAULT_ICON, FlagdayConfig, FlagdayDefinition};
pub use tracker::FlagdayTracker;
