use serde_json::{Map, Value};

/// The six snapshot fields the summary table needs.
///
/// Missing or wrong-typed fields fall back to `""` / `0.0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryFields {
    pub server_city: String,
    pub ip: String,
    pub latency_avg: f64,
    pub jitter: f64,
    pub download_90pct: f64,
    pub upload_90pct: f64,
}

impl SummaryFields {
    #[must_use]
    pub fn from_object(root: &Map<String, Value>) -> Self {
        Self {
            server_city: string_field(root, "server_city"),
            ip: string_field(root, "ip"),
            latency_avg: number_field(root, "latency_avg"),
            jitter: number_field(root, "jitter"),
            download_90pct: number_field(root, "download_90pct"),
            upload_90pct: number_field(root, "upload_90pct"),
        }
    }

    /// Reads the subset from any JSON value; non-objects yield `None`.
    #[must_use]
    pub fn from_value(root: &Value) -> Option<Self> {
        root.as_object().map(Self::from_object)
    }
}

fn string_field(root: &Map<String, Value>, key: &str) -> String {
    root.get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default()
}

fn number_field(root: &Map<String, Value>, key: &str) -> f64 {
    root.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}
