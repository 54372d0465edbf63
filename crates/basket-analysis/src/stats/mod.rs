//! Statistical annotation of derived rules: chi-square significance and
//! Wald confidence intervals.

pub mod interval;
pub mod significance;

pub use interval::confidence_interval;
pub use significance::significance;

use basket_core::config::AnalysisConfig;
use basket_core::types::{AssociationRule, SupportIndex};

/// Attach significance and confidence-interval estimates to each rule.
///
/// Frequencies are resolved against the mined-collection index; rules keep
/// their values untouched when a lookup fails (cannot happen for rules the
/// generator accepted from the same collection).
pub fn annotate_rules(
    rules: &mut [AssociationRule],
    index: &SupportIndex,
    total_transactions: usize,
    config: &AnalysisConfig,
) {
    let total = total_transactions as f64;
    for rule in rules.iter_mut() {
        let Some(antecedent_support) = index.support(&rule.antecedent) else {
            continue;
        };
        let Some(consequent_support) = index.support(&rule.consequent) else {
            continue;
        };

        let observed = (rule.support * total).round();
        let freq_antecedent = (antecedent_support * total).round();
        let freq_consequent = (consequent_support * total).round();

        rule.significance = Some(significance(
            observed,
            total,
            freq_antecedent,
            freq_consequent,
        ));
        // The antecedent count is the number of trials behind the
        // confidence proportion.
        rule.confidence_interval = Some(confidence_interval(
            rule.confidence,
            freq_antecedent as u64,
            config.confidence_level,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_core::types::Itemset;

    fn set(items: &[&str], support: f64, count: u32) -> Itemset {
        Itemset::new(items.iter().map(|s| s.to_string()).collect(), support, count)
    }

    #[test]
    fn test_annotate_fixture_rule() {
        let itemsets = vec![
            set(&["Y"], 0.8, 4),
            set(&["Z"], 0.6, 3),
            set(&["Y", "Z"], 0.6, 3),
        ];
        let index = SupportIndex::from_itemsets(&itemsets);
        let mut rules = vec![AssociationRule::new(
            vec!["Y".into()],
            vec!["Z".into()],
            0.75,
            1.25,
            0.6,
        )];

        annotate_rules(&mut rules, &index, 5, &AnalysisConfig::default());

        // expected = 4 * 3 / 5 = 2.4; chi = (3 - 2.4)^2 / 2.4 = 0.15;
        // p = exp(-0.075)
        let significance = rules[0].significance.unwrap();
        assert!((significance - (-0.075f64).exp()).abs() < 1e-12);

        // se = sqrt(0.75 * 0.25 / 4); z = 1.96
        let (lower, upper) = rules[0].confidence_interval.unwrap();
        let se = (0.75f64 * 0.25 / 4.0).sqrt();
        assert!((lower - (0.75 - 1.96 * se)).abs() < 1e-12);
        assert!((upper - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unresolvable_rule_left_unannotated() {
        let index = SupportIndex::from_itemsets(&[]);
        let mut rules = vec![AssociationRule::new(
            vec!["A".into()],
            vec!["B".into()],
            0.5,
            1.0,
            0.25,
        )];
        annotate_rules(&mut rules, &index, 4, &AnalysisConfig::default());
        assert!(rules[0].significance.is_none());
        assert!(rules[0].confidence_interval.is_none());
    }
}
