use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::http::DEFAULT_ENDPOINT;
use crate::summary::DEFAULT_SUMMARY_PATH;

use super::defaults::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_PARALLEL_WORKERS, DEFAULT_TIMEOUT};
use super::parsers::{parse_duration_arg, parse_positive_usize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Network speed benchmark against the Cloudflare speed endpoint - latency, jitter, download/upload ladders, JSON snapshots and multi-run summary tables."
)]
pub struct BenchArgs {
    /// Use parallel download tests
    #[arg(long = "parallel", short = 'p')]
    pub parallel: bool,

    /// Concurrent downloads per batch when --parallel is set
    #[arg(
        long = "parallel-workers",
        default_value = DEFAULT_PARALLEL_WORKERS,
        value_parser = parse_positive_usize
    )]
    pub parallel_workers: NonZeroUsize,

    /// Minimize output (drops the [TIME] phase lines)
    #[arg(long = "minimize-output", short = 'm')]
    pub minimize_output: bool,

    /// Disable the network warm-up phase
    #[arg(long = "no-warmup")]
    pub no_warmup: bool,

    /// Pin the process to a single core
    #[arg(long = "single-core", short = 's')]
    pub single_core: bool,

    /// Do not yield (sleep) between test stages
    #[arg(long = "no-yield")]
    pub no_yield: bool,

    /// Do not lower process priority
    #[arg(long = "no-nice")]
    pub no_nice: bool,

    /// Drop Linux filesystem caches before the test (root only)
    #[arg(long = "drop-caches")]
    pub drop_caches: bool,

    /// Mask the last part of your IP address and hostname in output
    #[arg(long = "mask-sensitive")]
    pub mask_sensitive: bool,

    /// Print all explicitly set flags at the end
    #[arg(long = "show-flags-used")]
    pub show_flags_used: bool,

    /// Show host architecture, CPU and memory info
    #[arg(long = "show-sysinfo")]
    pub show_sysinfo: bool,

    /// Only print system info and exit (supports --mask-sensitive)
    #[arg(long = "show-sysinfo-only")]
    pub show_sysinfo_only: bool,

    /// Print the result snapshot as JSON to stdout
    #[arg(long = "json")]
    pub json: bool,

    /// Print a summary table comparing multiple JSON result files
    #[arg(long = "summary-table", num_args = 0.., value_name = "FILES")]
    pub summary_table: Option<Vec<PathBuf>>,

    /// Where the summary table rows are written
    #[arg(long = "summary-out", default_value = DEFAULT_SUMMARY_PATH)]
    pub summary_out: PathBuf,

    /// Show debug output (sets log level to debug unless overridden by CFSPEED_LOG/RUST_LOG)
    #[arg(long = "debug")]
    pub debug: bool,

    /// Dump byte-level details of summary inputs and outputs
    #[arg(long = "diagnostics")]
    pub diagnostics: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Speed test endpoint
    #[arg(long = "endpoint", env = "CFSPEED_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(long = "timeout", default_value = DEFAULT_TIMEOUT, value_parser = parse_duration_arg)]
    pub timeout: Duration,

    /// Connection timeout (supports ms/s/m/h)
    #[arg(
        long = "connect-timeout",
        default_value = DEFAULT_CONNECT_TIMEOUT,
        value_parser = parse_duration_arg
    )]
    pub connect_timeout: Duration,

    /// Path to config file (TOML or JSON)
    #[arg(long = "config", short = 'c')]
    pub config: Option<String>,
}

impl BenchArgs {
    /// Debug logging is requested by either `--debug` or `--diagnostics`.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.debug || self.diagnostics
    }
}
