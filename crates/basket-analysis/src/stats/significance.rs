//! Chi-square pseudo p-value for rule co-occurrence.

/// Significance of observing `observed` joint transactions when the
/// antecedent and consequent occur `freq_antecedent` and `freq_consequent`
/// times over `total_transactions`.
///
/// One-degree-of-freedom chi-square against the independence expectation,
/// approximated as `exp(-chi_square / 2)` and clamped to `[0, 1]`. A zero
/// expected co-occurrence returns the sentinel `1.0`; note that a p-value
/// of 1.0 conventionally denotes *no* significance, so downstream
/// consumers treating low values as strong evidence must special-case it.
pub fn significance(
    observed: f64,
    total_transactions: f64,
    freq_antecedent: f64,
    freq_consequent: f64,
) -> f64 {
    if total_transactions <= 0.0 {
        return 1.0;
    }
    let expected = freq_antecedent * freq_consequent / total_transactions;
    if expected == 0.0 {
        return 1.0;
    }
    let chi_square = (observed - expected).powi(2) / expected;
    (-chi_square / 2.0).exp().clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_expectation_sentinel() {
        assert_eq!(significance(3.0, 100.0, 0.0, 10.0), 1.0);
        assert_eq!(significance(3.0, 100.0, 10.0, 0.0), 1.0);
    }

    #[test]
    fn test_zero_total_sentinel() {
        assert_eq!(significance(0.0, 0.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn test_observed_equal_to_expected_is_one() {
        // expected = 20 * 10 / 100 = 2
        assert!((significance(2.0, 100.0, 20.0, 10.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_chi_square() {
        // expected = 2, observed = 6: chi = 16 / 2 = 8, p = exp(-4)
        let p = significance(6.0, 100.0, 20.0, 10.0);
        assert!((p - (-4.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_larger_deviation_is_more_significant() {
        let near = significance(3.0, 100.0, 20.0, 10.0);
        let far = significance(9.0, 100.0, 20.0, 10.0);
        assert!(far < near);
    }

    #[test]
    fn test_result_bounded() {
        let p = significance(1000.0, 1000.0, 1000.0, 1000.0);
        assert!((0.0..=1.0).contains(&p));
    }
}
