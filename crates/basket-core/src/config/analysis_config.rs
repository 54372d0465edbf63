//! The per-invocation analysis configuration.

use serde::{Deserialize, Serialize};

/// Immutable value object holding every threshold for one analysis run.
///
/// Constructed directly or resolved from a layered `BasketConfig`; never
/// mutated mid-run. Semantic validation (thresholds inside `[0, 1]`) is a
/// caller responsibility — the algorithms themselves degrade to empty or
/// partial results on degenerate values rather than erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Base minimum support for itemsets of size ≥ 2.
    pub min_support: f64,
    /// Minimum rule confidence.
    pub min_confidence: f64,
    /// Minimum rule lift.
    pub min_lift: f64,
    /// Minimum support for single items (level 1).
    pub min_itemset_support: f64,
    /// Smallest reported bundle size.
    pub min_bundle_size: usize,
    /// Largest mined bundle size; `None` leaves only the built-in guards.
    pub max_bundle_size: Option<usize>,
    /// Raise the support threshold with itemset size to suppress
    /// spurious large combinations.
    pub adaptive_support: bool,
    /// Wall-clock budget in seconds, checked once per mining level.
    pub max_analysis_time: f64,
    /// Confidence level for Wald intervals (0.95 or 0.99; anything else
    /// falls back to the 95% z-score).
    pub confidence_level: f64,
    /// Run k-fold stability assessment as part of validation.
    pub enable_cross_validation: bool,
    /// Number of cross-validation folds.
    pub cross_validation_folds: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_support: 0.05,
            min_confidence: 0.3,
            min_lift: 1.0,
            min_itemset_support: 0.02,
            min_bundle_size: 2,
            max_bundle_size: None,
            adaptive_support: true,
            max_analysis_time: 30.0,
            confidence_level: 0.95,
            enable_cross_validation: false,
            cross_validation_folds: 5,
        }
    }
}

impl AnalysisConfig {
    /// Copy with support and confidence thresholds relaxed by a factor,
    /// used for cross-validation training splits.
    pub fn relaxed(&self, factor: f64) -> Self {
        Self {
            min_support: self.min_support * factor,
            min_confidence: self.min_confidence * factor,
            ..self.clone()
        }
    }

    /// Copy with every acceptance threshold at zero, used for the
    /// cross-validation holdout split. Structural limits (bundle sizes,
    /// time budget) are kept.
    pub fn unthresholded(&self) -> Self {
        Self {
            min_support: 0.0,
            min_confidence: 0.0,
            min_lift: 0.0,
            min_itemset_support: 0.0,
            ..self.clone()
        }
    }
}
