use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::SummaryError;

use super::loader::SummaryRow;

pub const DEFAULT_SUMMARY_PATH: &str = "results/summary.json";

#[derive(Debug, Serialize)]
struct SummaryDocument<'a> {
    results: &'a [SummaryRow],
}

/// Renders the full aggregate document after checking every row.
///
/// # Errors
///
/// Returns the first row with a non-finite number, or a serde failure.
pub fn render_summary(rows: &[SummaryRow]) -> Result<String, SummaryError> {
    for (index, row) in rows.iter().enumerate() {
        validate_row(index, row)?;
    }
    serde_json::to_string(&SummaryDocument { results: rows })
        .map_err(|err| SummaryError::Serialize { source: err })
}

/// Writes the aggregate to `path`, replacing any previous file.
///
/// Nothing touches the filesystem until the whole document has rendered; the
/// file is then written beside `path` and renamed into place.
///
/// # Errors
///
/// Returns an error when a row cannot be serialized or the file cannot be
/// written.
pub fn write_summary(rows: &[SummaryRow], path: &Path) -> Result<(), SummaryError> {
    let rendered = render_summary(rows)?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|err| SummaryError::CreateDir {
            path: parent.to_path_buf(),
            source: err,
        })?;
    }

    let staging = staging_path(path);
    std::fs::write(&staging, rendered).map_err(|err| SummaryError::WriteFile {
        path: staging.clone(),
        source: err,
    })?;
    if let Err(err) = std::fs::rename(&staging, path) {
        if let Err(cleanup) = std::fs::remove_file(&staging) {
            debug!("Failed to remove {}: {}", staging.display(), cleanup);
        }
        return Err(SummaryError::WriteFile {
            path: path.to_path_buf(),
            source: err,
        });
    }
    debug!("Wrote {} summary rows to {}", rows.len(), path.display());
    Ok(())
}

/// Serializes rows one at a time and reports the first that fails.
#[must_use]
pub fn locate_unserializable_row(rows: &[SummaryRow]) -> Option<(usize, SummaryError)> {
    rows.iter().enumerate().find_map(|(index, row)| {
        let checked = validate_row(index, row).and_then(|()| {
            serde_json::to_string(row)
                .map(drop)
                .map_err(|err| SummaryError::Serialize { source: err })
        });
        checked.err().map(|err| (index, err))
    })
}

fn validate_row(index: usize, row: &SummaryRow) -> Result<(), SummaryError> {
    let fields = [
        ("latency", row.latency),
        ("jitter", row.jitter),
        ("download", row.download),
        ("upload", row.upload),
    ];
    match fields.into_iter().find(|(_, value)| !value.is_finite()) {
        Some((field, _)) => Err(SummaryError::NonFiniteField {
            index,
            label: row.label.clone(),
            field,
        }),
        None => Ok(()),
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
