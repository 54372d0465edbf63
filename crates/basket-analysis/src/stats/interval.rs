//! Wald confidence interval for a binomial proportion.

/// z-score for the supported confidence levels. Unrecognized levels fall
/// back to the 95% z-score rather than failing.
fn z_score(level: f64) -> f64 {
    const EPSILON: f64 = 1e-9;
    if (level - 0.99).abs() < EPSILON {
        2.576
    } else {
        1.96
    }
}

/// Wald normal-approximation interval for an observed `confidence`
/// proportion over `sample_size` trials.
///
/// Returns `(lower, upper)` clamped to `[0, 1]`; a non-positive sample
/// yields the uninformative `(0, 1)`.
pub fn confidence_interval(confidence: f64, sample_size: u64, level: f64) -> (f64, f64) {
    if sample_size == 0 {
        return (0.0, 1.0);
    }

    let n = sample_size as f64;
    let se = (confidence * (1.0 - confidence) / n).sqrt();
    let z = z_score(level);

    (
        (confidence - z * se).max(0.0),
        (confidence + z * se).min(1.0),
    )
}
