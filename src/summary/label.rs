use std::path::Path;

use crate::error::SummaryError;

const SUMMARY_FILE_MARKER: &str = "summary.json";
const JSON_SUFFIX: &str = ".json";

/// True for files written by the aggregator itself, which never feed a table.
#[must_use]
pub fn is_summary_output(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().contains(SUMMARY_FILE_MARKER))
        .unwrap_or(false)
}

/// File name without directories and without a trailing `.json`.
///
/// # Errors
///
/// Returns an error when the path has no UTF-8 file name.
pub fn label_for(path: &Path) -> Result<String, SummaryError> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| SummaryError::InvalidUtf8FileName {
            path: path.to_path_buf(),
        })?;
    Ok(name.strip_suffix(JSON_SUFFIX).unwrap_or(name).to_owned())
}
