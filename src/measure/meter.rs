use std::num::NonZeroUsize;
use std::sync::Arc;

use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::debug;

use crate::error::HttpError;
use crate::http::{FetchRequest, Transport};

use super::engine::Engine;
use super::latency::{LATENCY_PROBE_BYTES, LATENCY_PROBES, LatencySummary};
use super::speed::measure_speed;
use super::trim::trim_outliers;

/// Runs timed transfers through a shared [`Transport`].
#[derive(Clone)]
pub struct Meter {
    transport: Arc<dyn Transport>,
}

impl Meter {
    #[must_use]
    pub const fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    #[must_use]
    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    /// Probes round-trip time with small downloads.
    ///
    /// Failed probes are dropped; with no successful probe every slot is zero.
    pub async fn latency(&self) -> LatencySummary {
        let request = FetchRequest::download(LATENCY_PROBE_BYTES);
        let mut samples = Vec::with_capacity(LATENCY_PROBES);
        for probe in 0..LATENCY_PROBES {
            let started = Instant::now();
            match fetch_body(self.transport.as_ref(), &request).await {
                Ok(()) => samples.push(elapsed_ms(started)),
                Err(err) => debug!("Latency probe {} failed: {}", probe, err),
            }
        }
        LatencySummary::from_samples(&samples)
    }

    /// Sequential downloads of `bytes`, trimmed once all iterations finish.
    pub async fn download(&self, bytes: u64, iterations: usize) -> Vec<f64> {
        let request = FetchRequest::download(bytes);
        let mut samples = Vec::with_capacity(iterations);
        for _ in 0..iterations {
            if let Some(speed) = timed_download(self.transport.as_ref(), &request, bytes).await {
                samples.push(speed);
            }
        }
        trim_outliers(samples)
    }

    /// Sequential uploads of `bytes` zero characters, trimmed like downloads.
    ///
    /// An empty response body still counts as a successful upload.
    pub async fn upload(&self, bytes: u64, iterations: usize) -> Vec<f64> {
        let request = FetchRequest::upload(bytes);
        let mut samples = Vec::with_capacity(iterations);
        for iteration in 0..iterations {
            let started = Instant::now();
            match self.transport.fetch(&request).await {
                Ok(_) => samples.push(measure_speed(bytes, elapsed_ms(started))),
                Err(err) => debug!(
                    "Upload of {} bytes failed (iteration {}): {}",
                    bytes, iteration, err
                ),
            }
        }
        trim_outliers(samples)
    }

    /// Downloads in batches of at most `workers` concurrent transfers.
    ///
    /// Every batch is joined before the next one starts. Samples are kept in
    /// completion order, failures count as `0.0` and nothing is trimmed.
    pub async fn download_parallel(
        &self,
        bytes: u64,
        iterations: usize,
        workers: NonZeroUsize,
    ) -> Vec<f64> {
        let mut samples = Vec::with_capacity(iterations);
        let mut remaining = iterations;
        while remaining > 0 {
            let batch = remaining.min(workers.get());
            let mut set = JoinSet::new();
            for _ in 0..batch {
                let transport = Arc::clone(&self.transport);
                set.spawn(async move {
                    let request = FetchRequest::download(bytes);
                    timed_download(transport.as_ref(), &request, bytes).await
                });
            }
            while let Some(joined) = set.join_next().await {
                match joined {
                    Ok(Some(speed)) => samples.push(speed),
                    Ok(None) => samples.push(0.0),
                    Err(err) => {
                        debug!("Parallel download task of {} bytes aborted: {}", bytes, err);
                        samples.push(0.0);
                    }
                }
            }
            remaining = remaining.saturating_sub(batch);
        }
        samples
    }

    /// Downloads with whichever strategy `engine` names.
    pub async fn download_with(&self, engine: Engine, bytes: u64, iterations: usize) -> Vec<f64> {
        match engine {
            Engine::Sequential => self.download(bytes, iterations).await,
            Engine::Parallel { workers } => {
                self.download_parallel(bytes, iterations, workers).await
            }
        }
    }

    /// Throwaway requests that open the connection before anything is timed.
    pub async fn warm_up(&self, requests: usize, yield_between: bool) {
        let request = FetchRequest::download(LATENCY_PROBE_BYTES);
        for attempt in 0..requests {
            if let Err(err) = self.transport.fetch(&request).await {
                debug!("Warm-up request {} failed: {}", attempt, err);
            }
            if yield_between {
                pause().await;
            }
        }
    }
}

/// Short sleep that lets other tasks and the OS scheduler catch up.
pub(crate) async fn pause() {
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
}

async fn timed_download(
    transport: &dyn Transport,
    request: &FetchRequest,
    bytes: u64,
) -> Option<f64> {
    let started = Instant::now();
    match fetch_body(transport, request).await {
        Ok(()) => Some(measure_speed(bytes, elapsed_ms(started))),
        Err(err) => {
            debug!("Download of {} bytes failed: {}", bytes, err);
            None
        }
    }
}

/// A download only counts when the body arrived and is non-empty.
async fn fetch_body(transport: &dyn Transport, request: &FetchRequest) -> Result<(), HttpError> {
    let body = transport.fetch(request).await?;
    if body.is_empty() {
        return Err(HttpError::EmptyBody {
            url: request.path.clone(),
        });
    }
    Ok(())
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
