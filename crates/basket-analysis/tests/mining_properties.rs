//! Property tests for the mining and rule-derivation invariants.

use basket_analysis::{derive_rules, mine_itemsets, validate_statistically};
use basket_core::config::AnalysisConfig;
use basket_core::types::Transaction;
use proptest::prelude::*;

fn brute_force_support(transactions: &[Transaction], items: &[String]) -> f64 {
    if transactions.is_empty() {
        return 0.0;
    }
    let hits = transactions
        .iter()
        .filter(|t| items.iter().all(|item| t.items().contains(item)))
        .count();
    hits as f64 / transactions.len() as f64
}

fn small_batch() -> impl Strategy<Value = Vec<Transaction>> {
    let item = prop::sample::select(vec!["a", "b", "c", "d", "e", "f"]);
    prop::collection::vec(prop::collection::vec(item, 0..5), 0..25)
        .prop_map(|raw| raw.into_iter().map(Transaction::new).collect())
}

fn config() -> AnalysisConfig {
    AnalysisConfig {
        min_support: 0.2,
        min_confidence: 0.3,
        min_lift: 0.0,
        min_itemset_support: 0.1,
        min_bundle_size: 1,
        adaptive_support: false,
        ..Default::default()
    }
}

proptest! {
    #[test]
    fn mined_supports_match_brute_force(transactions in small_batch()) {
        let itemsets = mine_itemsets(&transactions, &config());
        for set in &itemsets {
            let expected = brute_force_support(&transactions, &set.items);
            prop_assert!((set.support - expected).abs() < 1e-12);
            prop_assert!(set.support > 0.0 && set.support <= 1.0);
        }
    }

    #[test]
    fn supports_are_anti_monotone(transactions in small_batch()) {
        // Removing an item from an itemset can only raise its support.
        let itemsets = mine_itemsets(&transactions, &config());
        for set in itemsets.iter().filter(|set| set.len() >= 2) {
            for skip in 0..set.len() {
                let subset: Vec<String> = set
                    .items
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != skip)
                    .map(|(_, item)| item.clone())
                    .collect();
                let subset_support = brute_force_support(&transactions, &subset);
                prop_assert!(subset_support >= set.support - 1e-12);
            }
        }
    }

    #[test]
    fn itemsets_are_canonical(transactions in small_batch()) {
        let itemsets = mine_itemsets(&transactions, &config());
        for set in &itemsets {
            for pair in set.items.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
        }
    }

    #[test]
    fn rules_are_well_formed(transactions in small_batch()) {
        let cfg = config();
        let itemsets = mine_itemsets(&transactions, &cfg);
        let rules = derive_rules(&itemsets, transactions.len(), &cfg);

        for rule in &rules {
            prop_assert!(!rule.antecedent.is_empty());
            prop_assert!(!rule.consequent.is_empty());
            prop_assert!(rule
                .antecedent
                .iter()
                .all(|item| !rule.consequent.contains(item)));
            prop_assert!(rule.confidence >= cfg.min_confidence - 1e-12);
            prop_assert!(rule.confidence <= 1.0 + 1e-12);
            prop_assert!(rule.lift > 0.0);
            prop_assert!(rule.support > 0.0 && rule.support <= 1.0);
        }
        for pair in rules.windows(2) {
            prop_assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn adaptive_mining_is_a_subset_of_flat_mining(transactions in small_batch()) {
        // Raising thresholds with level can only remove itemsets.
        let flat = mine_itemsets(&transactions, &config());
        let adaptive_cfg = AnalysisConfig {
            adaptive_support: true,
            ..config()
        };
        let adaptive = mine_itemsets(&transactions, &adaptive_cfg);
        for set in &adaptive {
            prop_assert!(flat.iter().any(|other| other.items == set.items));
        }
    }

    #[test]
    fn full_pipeline_never_panics(transactions in small_batch()) {
        let cfg = AnalysisConfig {
            enable_cross_validation: true,
            cross_validation_folds: 3,
            ..config()
        };
        let report = validate_statistically(&transactions, &cfg);
        prop_assert_eq!(report.metadata.total_transactions, transactions.len());
        if let Some(cv) = &report.cross_validation {
            prop_assert!(cv.stability_score >= 0.0 && cv.stability_score <= 1.0);
        }
    }
}
