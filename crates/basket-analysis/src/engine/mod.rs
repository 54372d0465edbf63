//! Pipeline orchestration: mine, derive, annotate, cross-validate.

use std::time::Instant;

use basket_core::config::AnalysisConfig;
use basket_core::errors::AnalysisError;
use basket_core::traits::{CancellationToken, ResultSink, TransactionSource};
use basket_core::types::{
    AnalysisMetadata, AnalysisReport, AssociationRule, FxHashSet, Itemset, SupportIndex,
    Transaction,
};
use tracing::{debug, info};

use crate::mining::ItemsetMiner;
use crate::rules::RuleGenerator;
use crate::stats::annotate_rules;
use crate::validation::CrossValidator;

/// Drives one analysis run end to end.
///
/// Owns its configuration; construct a fresh engine per run (or reuse one,
/// the operations are stateless). Cancellation is cooperative and checked
/// at mining level boundaries only.
pub struct AnalysisEngine {
    config: AnalysisConfig,
    cancellation: Option<CancellationToken>,
}

impl AnalysisEngine {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            cancellation: None,
        }
    }

    /// Attach a cancellation token observed during mining.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Mine frequent itemsets and report those of at least the configured
    /// minimum bundle size.
    pub fn mine_itemsets(&self, transactions: &[Transaction]) -> Vec<Itemset> {
        self.miner()
            .mine(transactions)
            .bundles(self.config.min_bundle_size)
    }

    /// Derive rules from a mined itemset collection.
    ///
    /// The collection must contain the subset itemsets the rules are built
    /// from; rules whose antecedent or consequent support cannot be
    /// resolved are rejected.
    pub fn derive_rules(
        &self,
        itemsets: &[Itemset],
        total_transactions: usize,
    ) -> Vec<AssociationRule> {
        RuleGenerator::new(&self.config).derive(itemsets, total_transactions)
    }

    /// Run the full pipeline and assemble the report.
    ///
    /// Rules are derived from the complete frequent collection (all sizes),
    /// independently of the bundle-size filter applied to the reported
    /// itemsets, then annotated with significance and Wald intervals.
    /// Cross-validation runs when enabled.
    pub fn validate_statistically(&self, transactions: &[Transaction]) -> AnalysisReport {
        let started = Instant::now();
        let total = transactions.len();

        let outcome = self.miner().mine(transactions);

        let itemsets = outcome.bundles(self.config.min_bundle_size);
        let mut rules = RuleGenerator::new(&self.config).derive(&outcome.itemsets, total);

        let index = SupportIndex::from_itemsets(&outcome.itemsets);
        annotate_rules(&mut rules, &index, total, &self.config);

        let cross_validation = self
            .config
            .enable_cross_validation
            .then(|| CrossValidator::new(&self.config).validate(transactions));

        let metadata = AnalysisMetadata {
            total_transactions: total,
            distinct_items: distinct_items(transactions),
            itemset_count: itemsets.len(),
            rule_count: rules.len(),
            analysis_time_ms: started.elapsed().as_millis() as u64,
            termination: outcome.termination,
        };

        info!(
            transactions = metadata.total_transactions,
            itemsets = metadata.itemset_count,
            rules = metadata.rule_count,
            elapsed_ms = metadata.analysis_time_ms,
            termination = %metadata.termination,
            "analysis complete"
        );

        AnalysisReport {
            itemsets,
            rules,
            cross_validation,
            metadata,
        }
    }

    /// Fetch from a source, analyze, and persist through a sink.
    pub fn analyze(
        &self,
        source: &dyn TransactionSource,
        sink: &mut dyn ResultSink,
    ) -> Result<AnalysisReport, AnalysisError> {
        let transactions = source.fetch()?;
        debug!(transactions = transactions.len(), "batch fetched");
        let report = self.validate_statistically(&transactions);
        sink.persist(&report)?;
        Ok(report)
    }

    fn miner(&self) -> ItemsetMiner<'_> {
        let miner = ItemsetMiner::new(&self.config);
        match &self.cancellation {
            Some(token) => miner.with_cancellation(token),
            None => miner,
        }
    }
}

fn distinct_items(transactions: &[Transaction]) -> usize {
    let mut items: FxHashSet<&str> = FxHashSet::default();
    for transaction in transactions {
        for item in transaction.items() {
            items.insert(item.as_str());
        }
    }
    items.len()
}
