//! Per-invocation interning of item identifiers.
//!
//! Canonical itemset keys are sorted id arrays rather than re-joined
//! strings, so ids must sort in the same order as the item strings they
//! stand for. The vocabulary assigns dense `u32` ranks over the
//! lexicographically sorted distinct items of one transaction batch.

use serde::{Deserialize, Serialize};

use super::collections::FxHashMap;
use super::transaction::Transaction;

/// Interned item identifier.
///
/// Ids are ranks into the lexicographically sorted vocabulary, so sorting
/// `ItemId`s is identical to sorting the underlying item strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    /// The raw rank.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Vocabulary of distinct item identifiers for one mining invocation.
#[derive(Debug, Default)]
pub struct ItemVocabulary {
    /// Item strings in lexicographic order; index = `ItemId` rank.
    items: Vec<String>,
    /// Reverse lookup from item string to rank.
    index: FxHashMap<String, ItemId>,
}

impl ItemVocabulary {
    /// Build the vocabulary from a transaction batch.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut items: Vec<String> = transactions
            .iter()
            .flat_map(|t| t.items().iter().cloned())
            .collect();
        items.sort_unstable();
        items.dedup();

        let index = items
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), ItemId(i as u32)))
            .collect();

        Self { items, index }
    }

    /// Look up the id of an item, if present.
    pub fn id(&self, item: &str) -> Option<ItemId> {
        self.index.get(item).copied()
    }

    /// Resolve an id back to its item string.
    pub fn resolve(&self, id: ItemId) -> &str {
        &self.items[id.index()]
    }

    /// Resolve a sorted id slice to its sorted item strings.
    pub fn resolve_all(&self, ids: &[ItemId]) -> Vec<String> {
        ids.iter().map(|&id| self.resolve(id).to_string()).collect()
    }

    /// Encode a transaction as a sorted id slice. Items outside the
    /// vocabulary are skipped (cannot happen for the batch the vocabulary
    /// was built from).
    pub fn encode(&self, transaction: &Transaction) -> Vec<ItemId> {
        // Transaction items are already sorted lexicographically, and ids
        // are lexicographic ranks, so the encoded vector is sorted too.
        transaction
            .items()
            .iter()
            .filter_map(|s| self.id(s))
            .collect()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_lexicographic_ranks() {
        let txs = vec![
            Transaction::new(["pear", "apple"]),
            Transaction::new(["banana", "apple"]),
        ];
        let vocab = ItemVocabulary::from_transactions(&txs);
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.id("apple"), Some(ItemId(0)));
        assert_eq!(vocab.id("banana"), Some(ItemId(1)));
        assert_eq!(vocab.id("pear"), Some(ItemId(2)));
        assert_eq!(vocab.resolve(ItemId(1)), "banana");
    }

    #[test]
    fn test_encode_preserves_sorted_order() {
        let txs = vec![Transaction::new(["c", "a", "b"])];
        let vocab = ItemVocabulary::from_transactions(&txs);
        let encoded = vocab.encode(&txs[0]);
        assert_eq!(encoded, vec![ItemId(0), ItemId(1), ItemId(2)]);
    }

    #[test]
    fn test_unknown_item_lookup() {
        let vocab = ItemVocabulary::from_transactions(&[]);
        assert!(vocab.is_empty());
        assert_eq!(vocab.id("ghost"), None);
    }
}
