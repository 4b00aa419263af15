//! End-to-end benchmark run: warm-up, edge metadata, latency and the
//! download/upload ladders, assembled into one [`Snapshot`](crate::snapshot::Snapshot).
mod metadata;
mod output;
mod plan;
mod runner;


pub use metadata::{
    LOCATIONS_PATH, TRACE_PATH, mask_ip, parse_locations, parse_trace, resolve_server,
};
pub use output::Console;
pub use plan::{DOWNLOAD_LADDER, Stage, UPLOAD_LADDER, WARM_UP_REQUESTS};
pub use runner::{BenchConfig, run_benchmark};
