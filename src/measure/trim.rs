/// Drops the cold-start sample and the slowest remaining sample.
///
/// Only applied once a stage has finished and only when more than two
/// samples succeeded; smaller sets are returned untouched.
#[must_use]
pub fn trim_outliers(mut samples: Vec<f64>) -> Vec<f64> {
    if samples.len() <= 2 {
        return samples;
    }
    samples.remove(0);
    let slowest = samples
        .iter()
        .enumerate()
        .min_by(|(_, left), (_, right)| left.total_cmp(right))
        .map(|(index, _)| index);
    if let Some(index) = slowest {
        samples.remove(index);
    }
    samples
}
