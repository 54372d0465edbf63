//! Error handling for Basket.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! The mining algorithms themselves never error on well-typed input;
//! budget and cancellation paths return valid partial results. `Result`
//! appears only at the seams: configuration and the source/sink
//! collaborators.

pub mod analysis_error;
pub mod config_error;
pub mod sink_error;
pub mod source_error;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use sink_error::SinkError;
pub use source_error::SourceError;
