use tokio::time::Instant;
use tracing::debug;

use crate::measure::{Engine, Meter, pause};
use crate::snapshot::{Environment, Snapshot, StageSamples};

use super::metadata::{self, LOCATIONS_PATH, TRACE_PATH};
use super::output::Console;
use super::plan::{DOWNLOAD_LADDER, UPLOAD_LADDER, WARM_UP_REQUESTS};

/// Run-wide switches handed to [`run_benchmark`].
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub engine: Engine,
    pub warm_up: bool,
    pub yield_between: bool,
    pub mask_sensitive: bool,
    /// Flags set explicitly on the command line, recorded in the snapshot.
    pub flags: Vec<String>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            engine: Engine::Sequential,
            warm_up: true,
            yield_between: true,
            mask_sensitive: false,
            flags: Vec::new(),
        }
    }
}

/// Runs every phase in order and assembles the snapshot.
///
/// Never fails: unreachable metadata leaves empty strings and failed
/// transfers leave empty (or zero-filled) stages.
pub async fn run_benchmark(
    meter: &Meter,
    config: &BenchConfig,
    console: &Console,
    environment: Environment,
) -> Snapshot {
    let started = Instant::now();
    if config.warm_up {
        meter.warm_up(WARM_UP_REQUESTS, config.yield_between).await;
    }

    let phase = Instant::now();
    let locations = metadata::fetch_text(meter.transport(), LOCATIONS_PATH)
        .await
        .map(|json| metadata::parse_locations(&json))
        .unwrap_or_default();
    console.timing("Fetch locations", elapsed_ms(phase));

    let phase = Instant::now();
    let trace = metadata::fetch_text(meter.transport(), TRACE_PATH)
        .await
        .map(|text| metadata::parse_trace(&text))
        .unwrap_or_default();
    console.timing("Fetch trace", elapsed_ms(phase));

    let phase = Instant::now();
    let latency = meter.latency().await;
    console.timing("Latency", elapsed_ms(phase));

    let server = metadata::resolve_server(&locations, &trace, config.mask_sensitive);
    console.info("Server location", &format!("{} ({})", server.city, server.colo));
    console.info("Your IP", &format!("{} ({})", server.ip, server.loc));
    console.latency(&latency);

    let phase = Instant::now();
    let mut downloads = Vec::with_capacity(DOWNLOAD_LADDER.len());
    for stage in DOWNLOAD_LADDER {
        let samples = meter
            .download_with(config.engine, stage.payload_bytes, stage.iterations)
            .await;
        debug!("Download stage {} kept {} samples", stage.label, samples.len());
        // Parallel batches already interleave; uploads below are always sequential.
        if config.yield_between && !config.engine.is_parallel() {
            pause().await;
        }
        console.stage(stage.label, &samples);
        downloads.push(StageSamples {
            label: stage.label,
            samples,
        });
    }
    console.timing("Download tests", elapsed_ms(phase));
    let all_downloads = concat(&downloads);
    console.headline("Download speed", &all_downloads);

    let phase = Instant::now();
    let mut uploads = Vec::with_capacity(UPLOAD_LADDER.len());
    for stage in UPLOAD_LADDER {
        let samples = meter.upload(stage.payload_bytes, stage.iterations).await;
        debug!("Upload stage {} kept {} samples", stage.label, samples.len());
        if config.yield_between {
            pause().await;
        }
        uploads.push(StageSamples {
            label: stage.label,
            samples,
        });
    }
    console.timing("Upload tests", elapsed_ms(phase));
    let all_uploads = concat(&uploads);
    console.headline("Upload speed", &all_uploads);

    let total_time_ms = elapsed_ms(started);
    console.timing("Total", total_time_ms);

    Snapshot {
        environment,
        server,
        latency,
        downloads,
        uploads,
        all_downloads,
        all_uploads,
        total_time_ms,
        flags: config.flags.clone(),
    }
}

fn concat(stages: &[StageSamples]) -> Vec<f64> {
    stages
        .iter()
        .flat_map(|stage| stage.samples.iter().copied())
        .collect()
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
