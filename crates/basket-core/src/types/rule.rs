//! Association rules derived from mined itemsets.

use serde::{Deserialize, Serialize};

/// An antecedent → consequent association rule.
///
/// Antecedent and consequent are disjoint, non-empty, sorted item sets
/// whose union equals a mined itemset. `confidence = support(union) /
/// support(antecedent)`; `lift = confidence / support(consequent)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationRule {
    /// Sorted items of the rule body.
    pub antecedent: Vec<String>,
    /// Sorted items of the rule head.
    pub consequent: Vec<String>,
    /// P(consequent | antecedent), in `[0, 1]`.
    pub confidence: f64,
    /// Observed-over-expected co-occurrence ratio.
    pub lift: f64,
    /// Support of the full itemset the rule was derived from.
    pub support: f64,
    /// Chi-square pseudo p-value attached by statistical validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub significance: Option<f64>,
    /// Wald interval `(lower, upper)` for the confidence proportion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_interval: Option<(f64, f64)>,
}

impl AssociationRule {
    /// Build an unannotated rule.
    pub fn new(
        antecedent: Vec<String>,
        consequent: Vec<String>,
        confidence: f64,
        lift: f64,
        support: f64,
    ) -> Self {
        Self {
            antecedent,
            consequent,
            confidence,
            lift,
            support,
            significance: None,
            confidence_interval: None,
        }
    }

    /// Canonical key of the itemset the rule was derived from:
    /// the sorted union of antecedent and consequent.
    pub fn itemset_key(&self) -> Vec<String> {
        let mut union: Vec<String> = self
            .antecedent
            .iter()
            .chain(self.consequent.iter())
            .cloned()
            .collect();
        union.sort_unstable();
        union
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itemset_key_is_sorted_union() {
        let rule = AssociationRule::new(
            vec!["c".into()],
            vec!["a".into(), "b".into()],
            0.5,
            1.2,
            0.3,
        );
        assert_eq!(rule.itemset_key(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_annotations_omitted_from_json_when_absent() {
        let rule = AssociationRule::new(vec!["a".into()], vec!["b".into()], 0.5, 1.0, 0.25);
        let json = serde_json::to_string(&rule).unwrap();
        assert!(!json.contains("significance"));
        assert!(!json.contains("confidence_interval"));
    }
}
