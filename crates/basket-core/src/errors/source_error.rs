//! Transaction source errors.

/// Errors raised by a `TransactionSource` collaborator.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Transaction source unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed transaction batch: {0}")]
    Malformed(String),
}
