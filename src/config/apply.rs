use std::num::NonZeroUsize;

use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::BenchArgs;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments the user did not set.
///
/// Config keys are phrased positively (`warmup`, `yield`, `nice`) and map onto
/// the inverted `--no-*` flags.
///
/// # Errors
///
/// Returns an error when a config value is out of range.
pub fn apply_config(
    args: &mut BenchArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    apply_flag(matches, "parallel", config.parallel, &mut args.parallel);
    apply_flag(matches, "minimize_output", config.minimize_output, &mut args.minimize_output);
    apply_flag(matches, "no_warmup", config.warmup.map(|on| !on), &mut args.no_warmup);
    apply_flag(matches, "single_core", config.single_core, &mut args.single_core);
    apply_flag(matches, "no_yield", config.yield_between.map(|on| !on), &mut args.no_yield);
    apply_flag(matches, "no_nice", config.nice.map(|on| !on), &mut args.no_nice);
    apply_flag(matches, "drop_caches", config.drop_caches, &mut args.drop_caches);
    apply_flag(matches, "mask_sensitive", config.mask_sensitive, &mut args.mask_sensitive);
    apply_flag(matches, "show_sysinfo", config.show_sysinfo, &mut args.show_sysinfo);
    apply_flag(matches, "json", config.json, &mut args.json);
    apply_flag(matches, "debug", config.debug, &mut args.debug);
    apply_flag(matches, "no_color", config.no_color, &mut args.no_color);

    if !is_explicit(matches, "parallel_workers")
        && let Some(workers) = config.parallel_workers
    {
        args.parallel_workers = NonZeroUsize::new(workers).ok_or_else(|| {
            AppError::config(ConfigError::FieldMustBePositive {
                field: "parallel_workers",
            })
        })?;
    }

    if !is_explicit(matches, "summary_out")
        && let Some(path) = config.summary_out.clone()
    {
        args.summary_out = path;
    }

    if !is_explicit(matches, "endpoint")
        && let Some(endpoint) = config.endpoint.clone()
    {
        args.endpoint = endpoint;
    }

    if !is_cli(matches, "timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.timeout = timeout.to_duration("timeout")?;
    }

    if !is_cli(matches, "connect_timeout")
        && let Some(timeout) = config.connect_timeout.as_ref()
    {
        args.connect_timeout = timeout.to_duration("connect_timeout")?;
    }

    Ok(())
}

fn apply_flag(matches: &ArgMatches, name: &str, value: Option<bool>, target: &mut bool) {
    if !is_cli(matches, name)
        && let Some(value) = value
    {
        *target = value;
    }
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

/// Set on the command line or through an environment variable.
fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}
