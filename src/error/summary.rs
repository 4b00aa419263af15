use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Could not open '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Upstream data corruption, reported apart from ordinary parse failures.
    #[error("'{path}' contains invalid UTF-8 at byte {valid_up_to}.")]
    InvalidUtf8 { path: PathBuf, valid_up_to: usize },
    #[error("File name of '{path}' is not valid UTF-8.")]
    InvalidUtf8FileName { path: PathBuf },
    #[error("Failed to parse JSON in '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Root of '{path}' is not a JSON object.")]
    RootNotObject { path: PathBuf },
    #[error("Row {index} ('{label}') has a non-finite '{field}' value.")]
    NonFiniteField {
        index: usize,
        label: String,
        field: &'static str,
    },
    #[error("Failed to serialize summary: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write summary '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
