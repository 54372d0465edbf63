//! Level-wise frequent-itemset search.

use std::time::{Duration, Instant};

use basket_core::config::AnalysisConfig;
use basket_core::traits::{Cancellable, CancellationToken};
use basket_core::types::{ItemId, Itemset, ItemVocabulary, TerminationReason, Transaction};
use tracing::debug;

use super::candidates::generate_candidates;
use super::support::SupportCalculator;
use super::IdSet;

/// Deep levels with more candidates than this abort the search.
const CANDIDATE_GUARD_LIMIT: usize = 1000;
/// Level at which the candidate guard arms.
const CANDIDATE_GUARD_LEVEL: usize = 8;

/// Result of one mining run.
///
/// `itemsets` holds every frequent itemset of every size, ordered by level
/// and then canonical key; callers filter to the configured bundle size via
/// [`MiningOutcome::bundles`].
#[derive(Debug, Clone)]
pub struct MiningOutcome {
    /// All frequent itemsets, smallest sizes first.
    pub itemsets: Vec<Itemset>,
    /// Why the level-wise search stopped.
    pub termination: TerminationReason,
    /// Deepest level that was mined.
    pub levels: usize,
}

impl MiningOutcome {
    /// Itemsets of size ≥ `min_bundle_size` — the reported collection.
    pub fn bundles(&self, min_bundle_size: usize) -> Vec<Itemset> {
        self.itemsets
            .iter()
            .filter(|set| set.len() >= min_bundle_size)
            .cloned()
            .collect()
    }
}

/// Level-wise Apriori search over a transaction batch.
///
/// Never errors: budget and complexity limits degrade to a valid partial
/// result tagged with a [`TerminationReason`].
pub struct ItemsetMiner<'a> {
    config: &'a AnalysisConfig,
    cancellation: Option<&'a CancellationToken>,
}

impl<'a> ItemsetMiner<'a> {
    pub fn new(config: &'a AnalysisConfig) -> Self {
        Self {
            config,
            cancellation: None,
        }
    }

    /// Attach a cooperative cancellation token, checked once per level.
    pub fn with_cancellation(mut self, token: &'a CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Mine all frequent itemsets from the batch.
    ///
    /// An empty batch yields an empty result, not an error.
    pub fn mine(&self, transactions: &[Transaction]) -> MiningOutcome {
        let started = Instant::now();
        // NaN and negative budgets collapse to zero; infinite or oversized
        // budgets are effectively unbounded.
        let budget = Duration::try_from_secs_f64(self.config.max_analysis_time.max(0.0))
            .unwrap_or(Duration::MAX);

        let total = transactions.len();
        if total == 0 {
            return MiningOutcome {
                itemsets: Vec::new(),
                termination: TerminationReason::Exhausted,
                levels: 0,
            };
        }

        let vocabulary = ItemVocabulary::from_transactions(transactions);
        let encoded: Vec<Vec<_>> = transactions
            .iter()
            .map(|t| vocabulary.encode(t))
            .filter(|ids| !ids.is_empty())
            .collect();

        let calculator = SupportCalculator::new(self.config, total);

        let mut all_frequent: Vec<(IdSet, u32)> = Vec::new();
        let mut previous = self.mine_level_one(&encoded, &vocabulary, &calculator, total);
        debug!(level = 1, frequent = previous.len(), "level mined");

        let mut empty_levels = usize::from(previous.is_empty());
        all_frequent.extend(previous.iter().cloned());

        let mut levels = 1;
        let mut termination = TerminationReason::Exhausted;

        let mut k = 2;
        loop {
            // Cooperative checks fire at level boundaries only; a single
            // level's counting pass can overrun the budget before the
            // check sees it.
            if started.elapsed() > budget {
                termination = TerminationReason::TimeBudget;
                break;
            }
            if self.cancellation.is_some_and(|t| t.is_cancelled()) {
                termination = TerminationReason::Cancelled;
                break;
            }
            if empty_levels >= 2 {
                break;
            }
            if self.config.max_bundle_size.is_some_and(|max| k > max) {
                termination = TerminationReason::MaxBundleSize;
                break;
            }

            let prev_sets: Vec<IdSet> = previous.iter().map(|(set, _)| set.clone()).collect();
            let candidates = generate_candidates(&prev_sets, k);
            if k >= CANDIDATE_GUARD_LEVEL && candidates.len() > CANDIDATE_GUARD_LIMIT {
                termination = TerminationReason::CandidateGuard;
                break;
            }

            let threshold = calculator.threshold_for_level(k);
            let frequent = count_frequent(&candidates, &encoded, total, threshold);
            debug!(
                level = k,
                candidates = candidates.len(),
                frequent = frequent.len(),
                threshold,
                "level mined"
            );

            levels = k;
            if frequent.is_empty() {
                empty_levels += 1;
            } else {
                empty_levels = 0;
            }

            all_frequent.extend(frequent.iter().cloned());
            previous = frequent;
            k += 1;
        }

        let itemsets = all_frequent
            .into_iter()
            .map(|(set, count)| {
                Itemset::new(
                    vocabulary.resolve_all(&set),
                    count as f64 / total as f64,
                    count,
                )
            })
            .collect();

        MiningOutcome {
            itemsets,
            termination,
            levels,
        }
    }

    /// Level 1: raw item frequencies against the single-item threshold.
    fn mine_level_one(
        &self,
        encoded: &[Vec<ItemId>],
        vocabulary: &ItemVocabulary,
        calculator: &SupportCalculator,
        total: usize,
    ) -> Vec<(IdSet, u32)> {
        let mut counts = vec![0u32; vocabulary.len()];
        for transaction in encoded {
            for id in transaction {
                counts[id.index()] += 1;
            }
        }

        let threshold = calculator.threshold_for_level(1);
        counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0 && count as f64 / total as f64 >= threshold)
            .map(|(index, &count)| {
                let mut set = IdSet::new();
                set.push(ItemId(index as u32));
                (set, count)
            })
            .collect()
    }
}

/// Count candidate containment over the batch and keep those at or above
/// the threshold. Zero-support candidates are never kept — itemset support
/// lives in `(0, 1]` regardless of how low the threshold is.
fn count_frequent(
    candidates: &[IdSet],
    encoded: &[Vec<ItemId>],
    total: usize,
    threshold: f64,
) -> Vec<(IdSet, u32)> {
    candidates
        .iter()
        .filter_map(|candidate| {
            let count = encoded
                .iter()
                .filter(|transaction| is_subset(candidate, transaction))
                .count() as u32;
            let support = count as f64 / total as f64;
            (count > 0 && support >= threshold).then(|| (candidate.clone(), count))
        })
        .collect()
}

/// Sorted-slice subset test: is every id of `needle` present in `haystack`?
fn is_subset(needle: &[ItemId], haystack: &[ItemId]) -> bool {
    let mut h = 0;
    'outer: for &id in needle {
        while h < haystack.len() {
            match haystack[h].cmp(&id) {
                std::cmp::Ordering::Less => h += 1,
                std::cmp::Ordering::Equal => {
                    h += 1;
                    continue 'outer;
                }
                std::cmp::Ordering::Greater => return false,
            }
        }
        return false;
    }
    true
}
