const BITS_PER_BYTE: f64 = 8.0;
const MS_PER_SECOND: f64 = 1000.0;
const BITS_PER_MEGABIT: f64 = 1e6;

/// Throughput in Mbps for `bytes` transferred in `duration_ms`.
///
/// Non-positive or non-finite durations yield `0.0` instead of infinity.
#[must_use]
pub fn measure_speed(bytes: u64, duration_ms: f64) -> f64 {
    if !duration_ms.is_finite() || duration_ms <= 0.0 {
        return 0.0;
    }
    (bytes as f64 * BITS_PER_BYTE) / (duration_ms / MS_PER_SECOND) / BITS_PER_MEGABIT
}
