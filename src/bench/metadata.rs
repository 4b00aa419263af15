use std::collections::{BTreeMap, HashMap};

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::HttpError;
use crate::http::{FetchRequest, Transport};
use crate::snapshot::ServerInfo;

pub const LOCATIONS_PATH: &str = "/locations";
pub const TRACE_PATH: &str = "/cdn-cgi/trace";

/// Parses `key=value` lines; lines without `=` are ignored.
#[must_use]
pub fn parse_trace(text: &str) -> BTreeMap<String, String> {
    text.lines()
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect()
}

/// Maps IATA codes to city names from the locations document.
///
/// Anything other than an array of `{iata, city}` string pairs yields an
/// empty (or partial) map.
#[must_use]
pub fn parse_locations(json: &str) -> HashMap<String, String> {
    let entries = match serde_json::from_str::<Value>(json) {
        Ok(Value::Array(entries)) => entries,
        Ok(_) => {
            warn!("Locations document is not a JSON array");
            return HashMap::new();
        }
        Err(err) => {
            warn!("Failed to parse locations document: {}", err);
            return HashMap::new();
        }
    };
    entries
        .iter()
        .filter_map(|entry| {
            let iata = entry.get("iata")?.as_str()?;
            let city = entry.get("city")?.as_str()?;
            Some((iata.to_owned(), city.to_owned()))
        })
        .collect()
}

/// Hides the last IPv4 octet or IPv6 group.
#[must_use]
pub fn mask_ip(ip: &str) -> String {
    if let Some(pos) = ip.rfind('.') {
        return format!("{}***", ip.get(..=pos).unwrap_or_default());
    }
    if let Some(pos) = ip.rfind(':') {
        return format!("{}****", ip.get(..=pos).unwrap_or_default());
    }
    ip.to_owned()
}

/// Combines trace and locations into the server description.
///
/// The city falls back to the colo code when the colo is not a known location.
#[must_use]
pub fn resolve_server<S: std::hash::BuildHasher>(
    locations: &HashMap<String, String, S>,
    trace: &BTreeMap<String, String>,
    mask_sensitive: bool,
) -> ServerInfo {
    let field = |key: &str| trace.get(key).cloned().unwrap_or_default();
    let colo = field("colo");
    let city = locations.get(&colo).cloned().unwrap_or_else(|| colo.clone());
    let ip = field("ip");
    let ip = if mask_sensitive && !ip.is_empty() {
        mask_ip(&ip)
    } else {
        ip
    };
    ServerInfo {
        city,
        colo,
        ip,
        loc: field("loc"),
    }
}

/// GETs `path` as UTF-8 text; failures are logged and reported as `None`.
pub(super) async fn fetch_text(transport: &dyn Transport, path: &str) -> Option<String> {
    match fetch_utf8(transport, path).await {
        Ok(text) => Some(text),
        Err(err) => {
            warn!("Failed to fetch {}: {}", path, err);
            None
        }
    }
}

async fn fetch_utf8(transport: &dyn Transport, path: &str) -> Result<String, HttpError> {
    let body = transport.fetch(&FetchRequest::get(path)).await?;
    let text = std::str::from_utf8(&body).map_err(|err| HttpError::InvalidUtf8 {
        url: path.to_owned(),
        source: err,
    })?;
    debug!("Fetched {} ({} bytes)", path, body.len());
    Ok(text.to_owned())
}
