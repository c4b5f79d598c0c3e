//! Configuration module
//!
//! Settings for the selector's appearance, persisted as TOML in the
//! platform config directory.

pub mod config;
