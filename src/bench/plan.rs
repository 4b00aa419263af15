/// One rung of a transfer ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    pub label: &'static str,
    pub payload_bytes: u64,
    pub iterations: usize,
}

impl Stage {
    const fn new(label: &'static str, payload_bytes: u64, iterations: usize) -> Self {
        Self {
            label,
            payload_bytes,
            iterations,
        }
    }
}

/// Throwaway requests sent before anything is timed.
pub const WARM_UP_REQUESTS: usize = 3;

pub const DOWNLOAD_LADDER: [Stage; 5] = [
    Stage::new("100kB", 101_000, 10),
    Stage::new("1MB", 1_001_000, 8),
    Stage::new("10MB", 10_001_000, 6),
    Stage::new("25MB", 25_001_000, 4),
    Stage::new("100MB", 100_001_000, 1),
];

pub const UPLOAD_LADDER: [Stage; 3] = [
    Stage::new("11kB", 11_000, 10),
    Stage::new("100kB", 101_000, 10),
    Stage::new("1MB", 1_001_000, 8),
];
