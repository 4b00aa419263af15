//! Timed transfers and the per-stage sample sets they produce.
mod engine;
mod latency;
mod meter;
mod speed;
mod trim;


pub use engine::{DEFAULT_PARALLEL_WORKERS, Engine};
pub use latency::{LATENCY_PROBE_BYTES, LATENCY_PROBES, LatencySummary};
pub use meter::Meter;
pub(crate) use meter::pause;
pub use speed::measure_speed;
pub use trim::trim_outliers;
