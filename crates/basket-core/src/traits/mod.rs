//! Collaborator seams and cooperative cancellation.
//!
//! The engine depends on no concrete store or API client; callers inject
//! a `TransactionSource` for cleaned input batches and a `ResultSink` for
//! mined output.

pub mod cancellation;
pub mod sink;
pub mod source;

pub use cancellation::{Cancellable, CancellationToken};
pub use sink::{InMemoryResultSink, ResultSink};
pub use source::{InMemoryTransactionSource, TransactionSource};
