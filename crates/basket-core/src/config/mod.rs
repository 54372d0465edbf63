//! Configuration for the mining engine.
//!
//! `BasketConfig` is the TOML/env/CLI-facing layered configuration;
//! `AnalysisConfig` is the concrete, immutable value object handed to
//! every algorithm invocation.

pub mod analysis_config;
pub mod basket_config;

pub use analysis_config::AnalysisConfig;
pub use basket_config::{BasketConfig, CliOverrides, MiningSection, ValidationSection};
