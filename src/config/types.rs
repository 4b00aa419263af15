use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::args::parsers::parse_duration_arg;
use crate::error::{AppError, AppResult, ConfigError};

/// Settings accepted from `cfspeed.toml` / `cfspeed.json`.
///
/// Every field is optional; a value only applies when the matching flag was
/// not given on the command line.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub parallel: Option<bool>,
    pub parallel_workers: Option<usize>,
    pub minimize_output: Option<bool>,
    pub warmup: Option<bool>,
    pub single_core: Option<bool>,
    #[serde(rename = "yield")]
    pub yield_between: Option<bool>,
    pub nice: Option<bool>,
    pub drop_caches: Option<bool>,
    pub mask_sensitive: Option<bool>,
    pub show_sysinfo: Option<bool>,
    pub json: Option<bool>,
    pub summary_out: Option<PathBuf>,
    pub debug: Option<bool>,
    pub no_color: Option<bool>,
    pub endpoint: Option<String>,
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
}

/// Either whole seconds or a string with a unit (`250ms`, `30s`, `2m`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self, field: &'static str) -> AppResult<Duration> {
        match self {
            DurationValue::Seconds(0) => {
                Err(AppError::config(ConfigError::FieldMustBePositive { field }))
            }
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_duration_arg(text),
        }
    }
}
