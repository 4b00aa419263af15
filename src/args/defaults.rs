/// Config filenames checked when `--config` is not given.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["cfspeed.toml", "cfspeed.json"];

pub(super) const DEFAULT_PARALLEL_WORKERS: &str = "2";
pub(super) const DEFAULT_TIMEOUT: &str = "60s";
pub(super) const DEFAULT_CONNECT_TIMEOUT: &str = "10s";
