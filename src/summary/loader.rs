use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::SummaryError;
use crate::snapshot::SummaryFields;

use super::diagnostics;
use super::label::{is_summary_output, label_for};

/// One line of the summary table, persisted as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub label: String,
    pub server_city: String,
    pub ip: String,
    pub latency: f64,
    pub jitter: f64,
    pub download: f64,
    pub upload: f64,
}

impl SummaryRow {
    #[must_use]
    pub fn new(label: String, fields: SummaryFields) -> Self {
        Self {
            label,
            server_city: fields.server_city,
            ip: fields.ip,
            latency: fields.latency_avg,
            jitter: fields.jitter,
            download: fields.download_90pct,
            upload: fields.upload_90pct,
        }
    }
}

/// Loads every readable snapshot among `paths`, in argument order.
///
/// Aggregate outputs are ignored and unreadable files are skipped with a
/// warning, so the result may be shorter than the input.
pub fn load_rows<P: AsRef<Path>>(paths: &[P], diagnostics_mode: bool) -> Vec<SummaryRow> {
    let mut rows = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        if is_summary_output(path) {
            debug!("Ignoring aggregate file {}", path.display());
            continue;
        }
        match load_row(path, diagnostics_mode) {
            Ok(row) => {
                debug!(
                    "Loaded: {} | server_city='{}' ip='{}' latency={} jitter={} download={} upload={}",
                    row.label, row.server_city, row.ip, row.latency, row.jitter, row.download, row.upload
                );
                rows.push(row);
            }
            Err(err) => warn!("Skipping {}: {}", path.display(), err),
        }
    }
    rows
}

/// Reads one snapshot file into a row.
///
/// # Errors
///
/// Returns an error when the file cannot be read, is not UTF-8, is not JSON,
/// or its root is not an object.
pub fn load_row(path: &Path, diagnostics_mode: bool) -> Result<SummaryRow, SummaryError> {
    let label = label_for(path)?;
    let bytes = std::fs::read(path).map_err(|err| SummaryError::ReadFile {
        path: path.to_path_buf(),
        source: err,
    })?;
    if diagnostics_mode {
        diagnostics::dump_file(path, &bytes);
    }
    let text = std::str::from_utf8(&bytes).map_err(|err| SummaryError::InvalidUtf8 {
        path: path.to_path_buf(),
        valid_up_to: err.valid_up_to(),
    })?;
    let root: Value = serde_json::from_str(text).map_err(|err| SummaryError::ParseJson {
        path: path.to_path_buf(),
        source: err,
    })?;
    let fields = SummaryFields::from_value(&root).ok_or_else(|| SummaryError::RootNotObject {
        path: path.to_path_buf(),
    })?;
    Ok(SummaryRow::new(label, fields))
}
