//! Frequent-itemset mining and bundle-rule derivation.
//!
//! Level-wise Apriori search with adaptive support thresholds, association
//! rule generation, chi-square significance and Wald interval annotation,
//! and k-fold cross-validated stability scoring. Inputs are fully
//! materialized transaction batches; persistence and order fetching live
//! behind the `basket_core::traits` seams.

pub mod engine;
pub mod mining;
pub mod rules;
pub mod stats;
pub mod validation;

pub use engine::AnalysisEngine;
pub use mining::{ItemsetMiner, MiningOutcome, SupportCalculator};
pub use rules::RuleGenerator;
pub use validation::CrossValidator;

use basket_core::config::AnalysisConfig;
use basket_core::types::{AnalysisReport, AssociationRule, Itemset, Transaction};

/// Mine all itemsets of size ≥ `min_bundle_size` meeting the
/// level-appropriate minimum support.
pub fn mine_itemsets(transactions: &[Transaction], config: &AnalysisConfig) -> Vec<Itemset> {
    AnalysisEngine::new(config.clone()).mine_itemsets(transactions)
}

/// Derive antecedent → consequent rules from a mined itemset collection.
///
/// Subset supports are resolved against the given collection; rules whose
/// antecedent or consequent support is missing are rejected. Output is
/// sorted descending by confidence (stable).
pub fn derive_rules(
    itemsets: &[Itemset],
    total_transactions: usize,
    config: &AnalysisConfig,
) -> Vec<AssociationRule> {
    AnalysisEngine::new(config.clone()).derive_rules(itemsets, total_transactions)
}

/// Run the full pipeline: mine, derive, annotate with significance and
/// confidence intervals, and (when enabled) cross-validate.
pub fn validate_statistically(
    transactions: &[Transaction],
    config: &AnalysisConfig,
) -> AnalysisReport {
    AnalysisEngine::new(config.clone()).validate_statistically(transactions)
}
