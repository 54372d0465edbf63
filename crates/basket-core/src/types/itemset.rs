//! Frequent itemsets and the canonical-key support index.

use serde::{Deserialize, Serialize};

use super::collections::FxHashMap;

/// A frequent set of item identifiers considered as a potential bundle.
///
/// Invariants: items are unique and lexicographically sorted (the sorted
/// sequence is the canonical identity key); `support` is in `(0, 1]`;
/// `support_count` is the absolute number of containing transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itemset {
    /// Sorted, unique item identifiers.
    pub items: Vec<String>,
    /// Fraction of transactions containing every item of the set.
    pub support: f64,
    /// Absolute number of transactions containing the set.
    pub support_count: u32,
}

impl Itemset {
    /// Build an itemset from already-canonical (sorted, unique) items.
    pub fn new(items: Vec<String>, support: f64, support_count: u32) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Self {
            items,
            support,
            support_count,
        }
    }

    /// Number of items in the set.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Canonical-key lookup table over a mined itemset collection.
///
/// Keys are the sorted item sequences; values are `(support, support_count)`.
/// Used for subset-support lookups during rule derivation and for
/// statistical annotation.
#[derive(Debug, Default)]
pub struct SupportIndex {
    map: FxHashMap<Vec<String>, (f64, u32)>,
}

impl SupportIndex {
    /// Build the index from a mined itemset collection.
    /// Later duplicates of the same canonical key overwrite earlier ones.
    pub fn from_itemsets(itemsets: &[Itemset]) -> Self {
        let mut map = FxHashMap::default();
        for set in itemsets {
            map.insert(set.items.clone(), (set.support, set.support_count));
        }
        Self { map }
    }

    /// Support of the itemset with the given canonical key, if mined.
    pub fn support(&self, items: &[String]) -> Option<f64> {
        self.map.get(items).map(|&(support, _)| support)
    }

    /// Absolute count of the itemset with the given canonical key, if mined.
    pub fn support_count(&self, items: &[String]) -> Option<u32> {
        self.map.get(items).map(|&(_, count)| count)
    }

    /// Number of indexed itemsets.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
