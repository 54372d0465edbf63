//! K-fold stability assessment across the rule-mining pipeline.

use basket_core::config::AnalysisConfig;
use basket_core::types::{CrossValidationReport, FoldMetrics, Transaction};
use rayon::prelude::*;
use tracing::debug;

use crate::mining::ItemsetMiner;
use crate::rules::RuleGenerator;

/// Training thresholds are relaxed to this factor of their configured
/// values so folds retain enough rules to compare.
const TRAINING_RELAXATION: f64 = 0.8;

/// K-fold stability assessment over a transaction batch.
///
/// Folds are contiguous slices in original order (no shuffling). Each
/// fold's metrics come from the rules mined on the *other* folds with
/// relaxed thresholds; the held-out slice is additionally mined with all
/// thresholds at zero, but its rules are only counted, never compared
/// against the training rules. The stability score therefore measures
/// training-rule self-consistency across folds rather than out-of-sample
/// generalization.
pub struct CrossValidator<'a> {
    config: &'a AnalysisConfig,
}

impl<'a> CrossValidator<'a> {
    pub fn new(config: &'a AnalysisConfig) -> Self {
        Self { config }
    }

    /// Run the assessment. Fewer transactions than folds short-circuits
    /// to the all-zero report.
    pub fn validate(&self, transactions: &[Transaction]) -> CrossValidationReport {
        let folds = self.config.cross_validation_folds;
        let n = transactions.len();
        if folds == 0 || n < folds {
            return CrossValidationReport::insufficient();
        }

        // Folds are independent pure computations over disjoint slices.
        let fold_metrics: Vec<FoldMetrics> = (0..folds)
            .into_par_iter()
            .map(|fold| self.run_fold(transactions, fold, folds))
            .collect();

        let lifts: Vec<f64> = fold_metrics.iter().map(|f| f.average_lift).collect();
        let confidences: Vec<f64> = fold_metrics
            .iter()
            .map(|f| f.average_confidence)
            .collect();

        let stability_score =
            1.0 / (1.0 + ((variance(&lifts) + variance(&confidences)) / 2.0).sqrt());

        debug!(folds, stability_score, "cross-validation complete");

        CrossValidationReport {
            average_lift: mean(&lifts),
            average_confidence: mean(&confidences),
            stability_score,
            folds: fold_metrics,
        }
    }

    fn run_fold(&self, transactions: &[Transaction], fold: usize, folds: usize) -> FoldMetrics {
        let n = transactions.len();
        let start = fold * n / folds;
        let end = (fold + 1) * n / folds;

        let holdout = &transactions[start..end];
        let training: Vec<Transaction> = transactions[..start]
            .iter()
            .chain(transactions[end..].iter())
            .cloned()
            .collect();

        let relaxed = self.config.relaxed(TRAINING_RELAXATION);
        let mined = ItemsetMiner::new(&relaxed).mine(&training);
        let training_rules =
            RuleGenerator::new(&relaxed).derive(&mined.itemsets, training.len());

        // The held-out slice is mined with open thresholds; only the rule
        // count is retained.
        let open = self.config.unthresholded();
        let holdout_mined = ItemsetMiner::new(&open).mine(holdout);
        let holdout_rules =
            RuleGenerator::new(&open).derive(&holdout_mined.itemsets, holdout.len());

        let average_lift = mean_of(training_rules.iter().map(|r| r.lift));
        let average_confidence = mean_of(training_rules.iter().map(|r| r.confidence));

        FoldMetrics {
            fold,
            training_rules: training_rules.len(),
            holdout_rules: holdout_rules.len(),
            average_lift,
            average_confidence,
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn mean_of(values: impl Iterator<Item = f64>) -> f64 {
    let collected: Vec<f64> = values.collect();
    mean(&collected)
}

/// Population variance.
fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}
