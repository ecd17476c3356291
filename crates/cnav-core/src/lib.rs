// ABOUTME: Shared types and configuration for component-nav.
// ABOUTME: Defines display and driver settings and config file handling.

pub mod config;

pub use config::{Config, ConfigError, DisplaySettings, DriverSettings, MissPolicy};
