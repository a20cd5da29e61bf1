// src/rent/median.rs

/// Value at the 50th weighted percentile of `(value, weight)` pairs.
///
/// Returns the first value (ascending) whose cumulative weight reaches half
/// the total, so an even split resolves to the lower value. Empty input is 0,
/// and a non-positive total weight degrades to the plain mean.
pub fn weighted_median(pairs: &[(f64, f64)]) -> f64 {
    if pairs.is_empty() {
        return 0.0;
    }

    let total: f64 = pairs.iter().map(|(_, w)| w).sum();
    if total <= 0.0 {
        let sum: f64 = pairs.iter().map(|(v, _)| v).sum();
        return sum / pairs.len() as f64;
    }

    let mut ordered = pairs.to_vec();
    ordered.sort_by(|a, b| a.0.total_cmp(&b.0));

    let half = total / 2.0;
    let mut running = 0.0;
    for (value, weight) in &ordered {
        running += weight;
        if running >= half {
            return *value;
        }
    }

    // Float slack kept the running sum under half; fall back to the max.
    ordered.last().map(|(v, _)| *v).unwrap_or(0.0)
}
