//! Result sink errors.

/// Errors raised by a `ResultSink` collaborator.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Result sink rejected the report: {0}")]
    Rejected(String),

    #[error("Result sink unavailable: {0}")]
    Unavailable(String),
}
