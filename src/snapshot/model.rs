use crate::measure::LatencySummary;
use crate::stats;

/// Host description captured alongside a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub sysinfo_date: String,
    pub host: String,
    pub arch: String,
    pub kernel: String,
    pub cpu_model: String,
    pub mem_total: String,
    pub version: String,
    pub cpu_cores: u32,
}

/// Edge metadata resolved from the trace and locations endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerInfo {
    pub city: String,
    pub colo: String,
    pub ip: String,
    pub loc: String,
}

/// Samples gathered by one stage of a ladder.
#[derive(Debug, Clone, PartialEq)]
pub struct StageSamples {
    pub label: &'static str,
    pub samples: Vec<f64>,
}

/// Everything one benchmark run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub environment: Environment,
    pub server: ServerInfo,
    pub latency: LatencySummary,
    pub downloads: Vec<StageSamples>,
    pub uploads: Vec<StageSamples>,
    pub all_downloads: Vec<f64>,
    pub all_uploads: Vec<f64>,
    pub total_time_ms: f64,
    pub flags: Vec<String>,
}

impl Snapshot {
    /// Samples recorded for the download stage named `label`, empty when unknown.
    #[must_use]
    pub fn download(&self, label: &str) -> &[f64] {
        find_stage(&self.downloads, label)
    }

    #[must_use]
    pub fn upload(&self, label: &str) -> &[f64] {
        find_stage(&self.uploads, label)
    }

    #[must_use]
    pub const fn latency_avg(&self) -> f64 {
        self.latency.average
    }

    #[must_use]
    pub const fn jitter(&self) -> f64 {
        self.latency.jitter
    }

    #[must_use]
    pub fn download_90pct(&self) -> f64 {
        stats::percentile(&self.all_downloads, stats::P90)
    }

    #[must_use]
    pub fn upload_90pct(&self) -> f64 {
        stats::percentile(&self.all_uploads, stats::P90)
    }
}

fn find_stage<'a>(stages: &'a [StageSamples], label: &str) -> &'a [f64] {
    stages
        .iter()
        .find(|stage| stage.label == label)
        .map(|stage| stage.samples.as_slice())
        .unwrap_or_default()
}
