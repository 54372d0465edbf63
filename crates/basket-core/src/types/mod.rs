//! Data model for the mining engine.
//! Transactions, interned item ids, itemsets, rules, and analysis reports.

pub mod collections;
pub mod itemset;
pub mod report;
pub mod rule;
pub mod transaction;
pub mod vocabulary;

pub use collections::{FxHashMap, FxHashSet};
pub use itemset::{Itemset, SupportIndex};
pub use report::{
    AnalysisMetadata, AnalysisReport, CrossValidationReport, FoldMetrics, TerminationReason,
};
pub use rule::AssociationRule;
pub use transaction::Transaction;
pub use vocabulary::{ItemId, ItemVocabulary};
