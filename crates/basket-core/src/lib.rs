//! Core types, traits, errors, and configuration for the Basket mining engine.

pub mod config;
pub mod errors;
pub mod telemetry;
pub mod traits;
pub mod types;
