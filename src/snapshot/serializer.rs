use serde::Serialize;

use crate::error::AppResult;

use super::model::Snapshot;

/// On-disk field layout of a snapshot; borrows from the snapshot for one call.
#[derive(Debug, Serialize)]
struct SnapshotDocument<'a> {
    sysinfo_date: &'a str,
    server_city: &'a str,
    colo: &'a str,
    ip: &'a str,
    loc: &'a str,
    host: &'a str,
    arch: &'a str,
    kernel: &'a str,
    cpu_model: &'a str,
    mem_total: &'a str,
    version: &'a str,
    cpu_cores: u32,
    latency: [f64; 5],
    #[serde(rename = "download_100kB")]
    download_100kb: &'a [f64],
    #[serde(rename = "download_1MB")]
    download_1mb: &'a [f64],
    #[serde(rename = "download_10MB")]
    download_10mb: &'a [f64],
    #[serde(rename = "download_25MB")]
    download_25mb: &'a [f64],
    #[serde(rename = "download_100MB")]
    download_100mb: &'a [f64],
    all_downloads: &'a [f64],
    #[serde(rename = "upload_11kB")]
    upload_11kb: &'a [f64],
    #[serde(rename = "upload_100kB")]
    upload_100kb: &'a [f64],
    #[serde(rename = "upload_1MB")]
    upload_1mb: &'a [f64],
    all_uploads: &'a [f64],
    total_time_ms: f64,
    latency_avg: f64,
    jitter: f64,
    download_90pct: f64,
    upload_90pct: f64,
    flags: &'a [String],
}

impl<'a> SnapshotDocument<'a> {
    fn new(snapshot: &'a Snapshot) -> Self {
        let env = &snapshot.environment;
        let server = &snapshot.server;
        Self {
            sysinfo_date: &env.sysinfo_date,
            server_city: &server.city,
            colo: &server.colo,
            ip: &server.ip,
            loc: &server.loc,
            host: &env.host,
            arch: &env.arch,
            kernel: &env.kernel,
            cpu_model: &env.cpu_model,
            mem_total: &env.mem_total,
            version: &env.version,
            cpu_cores: env.cpu_cores,
            latency: snapshot.latency.as_array(),
            download_100kb: snapshot.download("100kB"),
            download_1mb: snapshot.download("1MB"),
            download_10mb: snapshot.download("10MB"),
            download_25mb: snapshot.download("25MB"),
            download_100mb: snapshot.download("100MB"),
            all_downloads: &snapshot.all_downloads,
            upload_11kb: snapshot.upload("11kB"),
            upload_100kb: snapshot.upload("100kB"),
            upload_1mb: snapshot.upload("1MB"),
            all_uploads: &snapshot.all_uploads,
            total_time_ms: snapshot.total_time_ms,
            latency_avg: snapshot.latency_avg(),
            jitter: snapshot.jitter(),
            download_90pct: snapshot.download_90pct(),
            upload_90pct: snapshot.upload_90pct(),
            flags: &snapshot.flags,
        }
    }
}

/// Compact single-line JSON for `snapshot`.
///
/// # Errors
///
/// Returns an error when serde fails to render the document.
pub fn to_json(snapshot: &Snapshot) -> AppResult<String> {
    Ok(serde_json::to_string(&SnapshotDocument::new(snapshot))?)
}

/// Snapshot document as an owned JSON value.
///
/// # Errors
///
/// Returns an error when serde fails to render the document.
pub fn to_value(snapshot: &Snapshot) -> AppResult<serde_json::Value> {
    Ok(serde_json::to_value(SnapshotDocument::new(snapshot))?)
}
