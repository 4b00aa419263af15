//! Core library for the `cfspeed` CLI.
//!
//! The crate measures latency, jitter and download/upload throughput against
//! the Cloudflare speed endpoint, records each run as a JSON snapshot and
//! folds many snapshots into a comparison table. The primary user-facing
//! interface is the `cfspeed` command-line application; library APIs may
//! evolve as the CLI grows.
pub mod args;
pub mod bench;
pub mod config;
pub mod error;
pub mod http;
pub mod measure;
pub mod snapshot;
pub mod stats;
pub mod summary;
pub mod system;
