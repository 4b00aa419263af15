use serde::{Serialize, Serializer};

use crate::stats;

/// Number of probes sent by the latency stage.
pub const LATENCY_PROBES: usize = 20;
/// Payload requested by each latency probe.
pub const LATENCY_PROBE_BYTES: u64 = 1000;

/// Latency statistics in milliseconds.
///
/// Serialized as `[min, max, average, median, jitter]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LatencySummary {
    pub min: f64,
    pub max: f64,
    pub average: f64,
    pub median: f64,
    pub jitter: f64,
}

impl LatencySummary {
    /// Summary reported when no probe succeeded.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            min: 0.0,
            max: 0.0,
            average: 0.0,
            median: 0.0,
            jitter: 0.0,
        }
    }

    #[must_use]
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self::zero();
        }
        Self {
            min: stats::min(samples),
            max: stats::max(samples),
            average: stats::average(samples),
            median: stats::median(samples),
            jitter: stats::jitter(samples),
        }
    }

    #[must_use]
    pub const fn as_array(&self) -> [f64; 5] {
        [self.min, self.max, self.average, self.median, self.jitter]
    }
}

impl Serialize for LatencySummary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_array().serialize(serializer)
    }
}
