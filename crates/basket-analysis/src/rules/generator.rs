//! Antecedent → consequent rule enumeration.

use basket_core::config::AnalysisConfig;
use basket_core::types::{AssociationRule, Itemset, SupportIndex};
use tracing::debug;

/// Derives association rules from a mined itemset collection.
///
/// Every non-empty proper subset of each itemset of size ≥ 2 becomes a
/// candidate antecedent, with the complement as consequent. Subset supports
/// are resolved by canonical-key lookup against the same collection; a
/// missing support rejects the rule (confidence is undefined without
/// antecedent evidence).
pub struct RuleGenerator<'a> {
    config: &'a AnalysisConfig,
}

impl<'a> RuleGenerator<'a> {
    pub fn new(config: &'a AnalysisConfig) -> Self {
        Self { config }
    }

    /// Derive rules from the collection, sorted descending by confidence.
    /// Ties keep enumeration order (stable sort).
    pub fn derive(
        &self,
        itemsets: &[Itemset],
        total_transactions: usize,
    ) -> Vec<AssociationRule> {
        let index = SupportIndex::from_itemsets(itemsets);
        let mut rules = Vec::new();

        for itemset in itemsets.iter().filter(|set| set.len() >= 2) {
            self.derive_from_itemset(itemset, &index, total_transactions, &mut rules);
        }

        rules.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!(rules = rules.len(), "rule derivation complete");
        rules
    }

    /// Bitmask enumeration of the `2^n - 2` non-trivial subsets.
    fn derive_from_itemset(
        &self,
        itemset: &Itemset,
        index: &SupportIndex,
        total_transactions: usize,
        rules: &mut Vec<AssociationRule>,
    ) {
        let n = itemset.len();
        // Masks are u64; itemsets anywhere near this width are stopped by
        // the mining guards long before rule derivation.
        if n < 2 || n >= 64 {
            return;
        }

        for mask in 1..((1u64 << n) - 1) {
            let mut antecedent = Vec::new();
            let mut consequent = Vec::new();
            for (bit, item) in itemset.items.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    antecedent.push(item.clone());
                } else {
                    consequent.push(item.clone());
                }
            }

            // Canonical order is inherited from the itemset, so both
            // sides are already sorted.
            let Some(antecedent_support) = index.support(&antecedent) else {
                continue;
            };
            let Some(consequent_support) = index.support(&consequent) else {
                continue;
            };
            if antecedent_support <= 0.0 || consequent_support <= 0.0 {
                continue;
            }
            // No antecedent evidence means no defined confidence.
            let antecedent_count =
                (antecedent_support * total_transactions as f64).round() as u64;
            if antecedent_count == 0 {
                continue;
            }

            let confidence = itemset.support / antecedent_support;
            let lift = confidence / consequent_support;

            if confidence >= self.config.min_confidence && lift >= self.config.min_lift {
                rules.push(AssociationRule::new(
                    antecedent,
                    consequent,
                    confidence,
                    lift,
                    itemset.support,
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str], support: f64, count: u32) -> Itemset {
        Itemset::new(items.iter().map(|s| s.to_string()).collect(), support, count)
    }

    /// The full mined collection for the 5-transaction fixture batch:
    /// [X,Y,Z], [X,Y], [X,Y,Z], [X], [Y,Z].
    fn fixture_itemsets() -> Vec<Itemset> {
        vec![
            set(&["X"], 0.8, 4),
            set(&["Y"], 0.8, 4),
            set(&["Z"], 0.6, 3),
            set(&["X", "Y"], 0.6, 3),
            set(&["X", "Z"], 0.4, 2),
            set(&["Y", "Z"], 0.6, 3),
            set(&["X", "Y", "Z"], 0.4, 2),
        ]
    }

    fn fixture_config() -> AnalysisConfig {
        AnalysisConfig {
            min_support: 0.2,
            min_confidence: 0.3,
            min_lift: 1.0,
            min_bundle_size: 2,
            min_itemset_support: 0.1,
            adaptive_support: false,
            ..Default::default()
        }
    }

    fn find<'r>(
        rules: &'r [AssociationRule],
        antecedent: &[&str],
        consequent: &[&str],
    ) -> Option<&'r AssociationRule> {
        rules
            .iter()
            .find(|r| r.antecedent == antecedent && r.consequent == consequent)
    }

    #[test]
    fn test_confidence_is_itemset_over_antecedent_support() {
        // With the lift gate relaxed, X → Y is accepted and its
        // confidence is support(XY) / support(X) = 0.6 / 0.8.
        let config = AnalysisConfig {
            min_lift: 0.0,
            ..fixture_config()
        };
        let rules = RuleGenerator::new(&config).derive(&fixture_itemsets(), 5);
        let rule = find(&rules, &["X"], &["Y"]).expect("X → Y missing");
        assert!((rule.confidence - 0.75).abs() < 1e-12);
        assert!((rule.lift - 0.9375).abs() < 1e-12);
        assert_eq!(rule.support, 0.6);
    }

    #[test]
    fn test_lift_gate_filters_negatively_correlated_rules() {
        let config = fixture_config();
        let rules = RuleGenerator::new(&config).derive(&fixture_itemsets(), 5);
        // lift(X → Y) = 0.9375 < 1.0
        assert!(find(&rules, &["X"], &["Y"]).is_none());
        // lift(Y → Z) = 0.75 / 0.6 = 1.25
        let rule = find(&rules, &["Y"], &["Z"]).expect("Y → Z missing");
        assert!((rule.confidence - 0.75).abs() < 1e-12);
        assert!((rule.lift - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_rules_sorted_descending_by_confidence() {
        let rules = RuleGenerator::new(&fixture_config()).derive(&fixture_itemsets(), 5);
        assert!(!rules.is_empty());
        for pair in rules.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
        // Z → Y and XZ → Y both have confidence 1.0; Z → Y enumerates
        // first (smaller itemset) and the sort is stable.
        assert_eq!(rules[0].antecedent, vec!["Z"]);
        assert_eq!(rules[0].consequent, vec!["Y"]);
        assert_eq!(rules[1].antecedent, vec!["X", "Z"]);
        assert_eq!(rules[1].consequent, vec!["Y"]);
    }

    #[test]
    fn test_missing_subset_support_rejects_rule() {
        // Only the pair itself is in the collection; singleton supports
        // are unknown, so no rule can be derived.
        let itemsets = vec![set(&["A", "B"], 0.5, 5)];
        let rules = RuleGenerator::new(&fixture_config()).derive(&itemsets, 10);
        assert!(rules.is_empty());
    }

    #[test]
    fn test_antecedent_and_consequent_disjoint_and_cover_itemset() {
        let rules = RuleGenerator::new(&fixture_config()).derive(&fixture_itemsets(), 5);
        for rule in &rules {
            assert!(!rule.antecedent.is_empty());
            assert!(!rule.consequent.is_empty());
            assert!(rule
                .antecedent
                .iter()
                .all(|item| !rule.consequent.contains(item)));
            let key = rule.itemset_key();
            assert!(fixture_itemsets().iter().any(|set| set.items == key));
        }
    }

    #[test]
    fn test_three_item_itemset_enumerates_six_splits() {
        // 2^3 - 2 = 6 candidate splits for XYZ; with all gates open every
        // split with known supports becomes a rule.
        let config = AnalysisConfig {
            min_confidence: 0.0,
            min_lift: 0.0,
            ..fixture_config()
        };
        let rules = RuleGenerator::new(&config).derive(&fixture_itemsets(), 5);
        let from_xyz = rules
            .iter()
            .filter(|r| r.itemset_key() == vec!["X", "Y", "Z"])
            .count();
        assert_eq!(from_xyz, 6);
    }

    #[test]
    fn test_singleton_only_collection_yields_no_rules() {
        let itemsets = vec![set(&["A"], 0.9, 9)];
        let rules = RuleGenerator::new(&fixture_config()).derive(&itemsets, 10);
        assert!(rules.is_empty());
    }
}
