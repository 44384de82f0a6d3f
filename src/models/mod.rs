//! Diesel row types and service configuration.

#[cfg(feature = "server")]
pub mod config;
pub mod craft;
