use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub(super) fn write_config(dir: &Path, name: &str, content: &str) -> Result<PathBuf, ConfigError> {
    let path = dir.join(name);
    std::fs::write(&path, content).map_err(|err| ConfigError::ReadConfig {
        path: path.clone(),
        source: err,
    })?;
    Ok(path)
}
