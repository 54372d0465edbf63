//! Analysis reports: mined results, run metadata, cross-validation metrics.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::itemset::Itemset;
use super::rule::AssociationRule;

/// Why a mining run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminationReason {
    /// The level-wise search ran out of frequent itemsets.
    Exhausted,
    /// The wall-clock budget was exceeded; the result is a valid prefix.
    TimeBudget,
    /// The candidate-count safety guard fired at a deep level.
    CandidateGuard,
    /// The configured maximum bundle size was reached.
    MaxBundleSize,
    /// Cooperative cancellation was requested.
    Cancelled,
}

impl TerminationReason {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exhausted => "exhausted",
            Self::TimeBudget => "time_budget",
            Self::CandidateGuard => "candidate_guard",
            Self::MaxBundleSize => "max_bundle_size",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Metadata describing one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Number of input transactions.
    pub total_transactions: usize,
    /// Number of distinct item identifiers seen.
    pub distinct_items: usize,
    /// Number of reported itemsets (after the bundle-size filter).
    pub itemset_count: usize,
    /// Number of accepted rules.
    pub rule_count: usize,
    /// Wall-clock duration of the run in milliseconds.
    pub analysis_time_ms: u64,
    /// Why the mining phase stopped.
    pub termination: TerminationReason,
}

/// Per-fold cross-validation metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoldMetrics {
    /// Zero-based fold index.
    pub fold: usize,
    /// Rules derived from the training split (relaxed thresholds).
    pub training_rules: usize,
    /// Rules derived from the held-out split (zero thresholds).
    /// Recorded for diagnostics only; never compared against training rules.
    pub holdout_rules: usize,
    /// Mean lift over the fold's training rules (0 when there are none).
    pub average_lift: f64,
    /// Mean confidence over the fold's training rules (0 when there are none).
    pub average_confidence: f64,
}

/// Cross-fold stability assessment of the rule-mining pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossValidationReport {
    /// Mean of the per-fold average lifts.
    pub average_lift: f64,
    /// Mean of the per-fold average confidences.
    pub average_confidence: f64,
    /// `1 / (1 + sqrt((var(lift) + var(confidence)) / 2))`, in `(0, 1]`;
    /// 1 means zero cross-fold variance. 0 only for the short-circuit case
    /// of fewer transactions than folds.
    pub stability_score: f64,
    /// Per-fold breakdown, in fold order.
    pub folds: Vec<FoldMetrics>,
}

impl CrossValidationReport {
    /// The all-zero report returned when there are fewer transactions
    /// than folds.
    pub fn insufficient() -> Self {
        Self {
            average_lift: 0.0,
            average_confidence: 0.0,
            stability_score: 0.0,
            folds: Vec::new(),
        }
    }
}

/// Complete output of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Reported itemsets, size ≥ the configured minimum bundle size.
    pub itemsets: Vec<Itemset>,
    /// Accepted rules, sorted descending by confidence.
    pub rules: Vec<AssociationRule>,
    /// Present when cross-validation was enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_validation: Option<CrossValidationReport>,
    /// Run metadata.
    pub metadata: AnalysisMetadata,
}
