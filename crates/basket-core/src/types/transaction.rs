//! A purchase transaction reduced to its set of distinct item identifiers.

use serde::{Deserialize, Serialize};

/// One order reduced to the set of distinct item identifiers purchased
/// together. Order-irrelevant; duplicates and empty identifiers are removed
/// at construction. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sorted, deduplicated item identifiers.
    items: Vec<String>,
}

impl Transaction {
    /// Build a transaction from raw item identifiers.
    ///
    /// Empty identifiers are dropped, duplicates collapsed, and the
    /// remainder sorted into canonical order.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut items: Vec<String> = items
            .into_iter()
            .map(Into::into)
            .filter(|s| !s.is_empty())
            .collect();
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    /// The canonical (sorted, unique) item identifiers.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the transaction carries no usable items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
