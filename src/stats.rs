//! Numeric summaries over throughput and latency samples.
//!
//! Every function accepts an unordered slice and never fails: empty input
//! resolves to `0.0`.

/// Fraction used for the headline and persisted "90th percentile" values.
pub const P90: f64 = 0.9;

#[must_use]
pub fn average(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let total: f64 = samples.iter().sum();
    total / samples.len() as f64
}

#[must_use]
pub fn median(samples: &[f64]) -> f64 {
    let sorted = sorted_copy(samples);
    let count = sorted.len();
    if count == 0 {
        return 0.0;
    }
    let mid = count / 2;
    if count % 2 == 1 {
        return sorted.get(mid).copied().unwrap_or(0.0);
    }
    match (sorted.get(mid.saturating_sub(1)), sorted.get(mid)) {
        (Some(low), Some(high)) => (low + high) / 2.0,
        _ => 0.0,
    }
}

/// Mean absolute difference between consecutive samples, in input order.
#[must_use]
pub fn jitter(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let diffs: Vec<f64> = samples
        .windows(2)
        .filter_map(|pair| match pair {
            [first, second] => Some((first - second).abs()),
            _ => None,
        })
        .collect();
    average(&diffs)
}

/// Linear interpolation between the ranks around `(n - 1) * fraction`.
#[must_use]
pub fn quartile(samples: &[f64], fraction: f64) -> f64 {
    let sorted = sorted_copy(samples);
    let Some(last) = sorted.len().checked_sub(1) else {
        return 0.0;
    };
    let position = (last as f64 * fraction).clamp(0.0, last as f64);
    let base = position.floor();
    let remainder = position - base;
    let base_index = (base as usize).min(last);
    let lower = sorted.get(base_index).copied().unwrap_or(0.0);
    match sorted.get(base_index.saturating_add(1)) {
        Some(upper) if base_index < last => lower + remainder * (upper - lower),
        _ => lower,
    }
}

/// Nearest-rank percentile: index `ceil(fraction * n) - 1`, clamped.
///
/// Always returns one of the sample values for non-empty input.
#[must_use]
pub fn percentile(samples: &[f64], fraction: f64) -> f64 {
    let sorted = sorted_copy(samples);
    let Some(last) = sorted.len().checked_sub(1) else {
        return 0.0;
    };
    let rank = (fraction * sorted.len() as f64).ceil();
    let index = if rank >= 1.0 {
        (rank as usize).saturating_sub(1).min(last)
    } else {
        0
    };
    sorted.get(index).copied().unwrap_or(0.0)
}

#[must_use]
pub fn min(samples: &[f64]) -> f64 {
    samples.iter().copied().reduce(f64::min).unwrap_or(0.0)
}

#[must_use]
pub fn max(samples: &[f64]) -> f64 {
    samples.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

fn sorted_copy(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn close(left: f64, right: f64) -> bool {
        (left - right).abs() < EPSILON
    }

    #[test]
    fn empty_inputs_resolve_to_zero() -> Result<(), String> {
        let checks = [
            (average(&[]), "average"),
            (median(&[]), "median"),
            (jitter(&[]), "jitter"),
            (jitter(&[42.0]), "jitter single"),
            (quartile(&[], P90), "quartile"),
            (percentile(&[], P90), "percentile"),
            (min(&[]), "min"),
            (max(&[]), "max"),
        ];
        for (value, name) in checks {
            if !close(value, 0.0) {
                return Err(format!("{} expected 0, got {}", name, value));
            }
        }
        Ok(())
    }

    #[test]
    fn median_handles_odd_and_even_counts() -> Result<(), String> {
        let odd = median(&[5.0, 1.0, 3.0]);
        if !close(odd, 3.0) {
            return Err(format!("Unexpected odd median: {}", odd));
        }
        let even = median(&[4.0, 1.0, 3.0, 2.0]);
        if !close(even, 2.5) {
            return Err(format!("Unexpected even median: {}", even));
        }
        Ok(())
    }

    #[test]
    fn average_and_median_ignore_input_order() -> Result<(), String> {
        let forward = [3.0, 9.0, 1.0, 7.0, 5.0, 11.0];
        let mut reversed = forward;
        reversed.reverse();
        if !close(average(&forward), average(&reversed)) {
            return Err("average depends on order".to_owned());
        }
        if !close(median(&forward), median(&reversed)) {
            return Err("median depends on order".to_owned());
        }
        Ok(())
    }

    #[test]
    fn jitter_uses_input_order() -> Result<(), String> {
        let value = jitter(&[10.0, 20.0, 10.0]);
        if !close(value, 10.0) {
            return Err(format!("Unexpected jitter: {}", value));
        }
        let sorted = jitter(&[10.0, 10.0, 20.0]);
        if !close(sorted, 5.0) {
            return Err(format!("Unexpected jitter for sorted input: {}", sorted));
        }
        Ok(())
    }

    #[test]
    fn quartile_interpolates_between_ranks() -> Result<(), String> {
        let value = quartile(&[10.0, 20.0, 30.0, 40.0], 0.5);
        if !close(value, 25.0) {
            return Err(format!("Unexpected quartile: {}", value));
        }
        Ok(())
    }

    #[test]
    fn quartile_bounds_match_min_and_max() -> Result<(), String> {
        let samples = [7.5, 2.0, 19.25, 4.0, 11.0];
        if !close(quartile(&samples, 0.0), 2.0) {
            return Err("quartile(0) should be the minimum".to_owned());
        }
        if !close(quartile(&samples, 1.0), 19.25) {
            return Err("quartile(1) should be the maximum".to_owned());
        }
        Ok(())
    }

    #[test]
    fn percentile_uses_ceiling_rank() -> Result<(), String> {
        let samples: Vec<f64> = (1..=10).map(f64::from).collect();
        let p90 = percentile(&samples, P90);
        if !close(p90, 9.0) {
            return Err(format!("Unexpected p90: {}", p90));
        }
        let interpolated = quartile(&samples, P90);
        if !close(interpolated, 9.1) {
            return Err(format!("Unexpected interpolated p90: {}", interpolated));
        }
        Ok(())
    }

    #[test]
    fn percentile_always_returns_a_sample() -> Result<(), String> {
        let samples = [3.5, 1.25, 8.0, 2.0];
        for step in 0..=20 {
            let fraction = f64::from(step) / 20.0;
            let value = percentile(&samples, fraction);
            if !samples.iter().any(|sample| close(*sample, value)) {
                return Err(format!(
                    "percentile({}) returned {} which is not a sample",
                    fraction, value
                ));
            }
        }
        Ok(())
    }

    #[test]
    fn min_max_track_extremes() -> Result<(), String> {
        let samples = [4.0, -1.0, 12.5];
        if !close(min(&samples), -1.0) || !close(max(&samples), 12.5) {
            return Err("Unexpected min/max".to_owned());
        }
        Ok(())
    }
}
