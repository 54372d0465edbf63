//! The transaction-producing collaborator.

use crate::errors::SourceError;
use crate::types::Transaction;

/// Produces cleaned transaction batches for one analysis run.
///
/// Implementations own the upstream concerns (order fetching, line-item
/// deduplication, exclusion of already-bundled SKUs); the engine assumes
/// the batch is fully materialized in memory.
pub trait TransactionSource: Send + Sync {
    /// Fetch the transaction batch to analyze.
    fn fetch(&self) -> Result<Vec<Transaction>, SourceError>;
}

/// In-memory implementation of `TransactionSource` for tests.
#[derive(Debug, Default)]
pub struct InMemoryTransactionSource {
    transactions: Vec<Transaction>,
}

impl InMemoryTransactionSource {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }
}

impl TransactionSource for InMemoryTransactionSource {
    fn fetch(&self) -> Result<Vec<Transaction>, SourceError> {
        Ok(self.transactions.clone())
    }
}
