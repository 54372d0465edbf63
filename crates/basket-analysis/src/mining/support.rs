//! Per-level minimum-support thresholds.

use basket_core::config::AnalysisConfig;

/// Computes the minimum-support threshold for a given itemset size.
///
/// Larger bundles require proportionally stronger evidence when adaptive
/// support is on, since spurious large co-occurrences grow combinatorially
/// with candidate count.
#[derive(Debug, Clone, Copy)]
pub struct SupportCalculator {
    min_support: f64,
    min_itemset_support: f64,
    adaptive: bool,
    total_transactions: usize,
}

impl SupportCalculator {
    pub fn new(config: &AnalysisConfig, total_transactions: usize) -> Self {
        Self {
            min_support: config.min_support,
            min_itemset_support: config.min_itemset_support,
            adaptive: config.adaptive_support,
            total_transactions,
        }
    }

    /// Threshold for itemsets of size `level`.
    ///
    /// Level 1 always uses the single-item threshold. For level k ≥ 2 with
    /// adaptive support, the base threshold is scaled by `1.5^(k-2)` and
    /// floored so that at least 5 observed transactions are demanded.
    pub fn threshold_for_level(&self, level: usize) -> f64 {
        if level <= 1 {
            return self.min_itemset_support;
        }
        if !self.adaptive {
            return self.min_support;
        }

        let multiplier = 1.5_f64.powi(level as i32 - 2);
        let floor = if self.total_transactions > 0 {
            self.min_itemset_support
                .max(5.0 / self.total_transactions as f64)
        } else {
            self.min_itemset_support
        };
        (self.min_support * multiplier).max(floor)
    }
}
