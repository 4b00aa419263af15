use std::num::NonZeroUsize;

/// Concurrent in-flight transfers used by the parallel engine by default.
pub const DEFAULT_PARALLEL_WORKERS: NonZeroUsize = NonZeroUsize::MIN.saturating_add(1);

/// Strategy used for the download ladder, fixed for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    /// One transfer at a time; failures are skipped and outliers trimmed.
    Sequential,
    /// Batches of up to `workers` transfers; failures count as `0.0`.
    Parallel { workers: NonZeroUsize },
}

impl Engine {
    /// Picks the parallel engine only when requested and more than one
    /// logical processor is available.
    #[must_use]
    pub const fn select(parallel: bool, workers: NonZeroUsize, available_cpus: usize) -> Self {
        if parallel && available_cpus > 1 {
            Engine::Parallel { workers }
        } else {
            Engine::Sequential
        }
    }

    /// [`Engine::select`] against the processors visible to this process.
    #[must_use]
    pub fn detect(parallel: bool, workers: NonZeroUsize) -> Self {
        let cpus = std::thread::available_parallelism().map_or(1, NonZeroUsize::get);
        Self::select(parallel, workers, cpus)
    }

    #[must_use]
    pub const fn is_parallel(&self) -> bool {
        matches!(self, Engine::Parallel { .. })
    }
}
