use std::path::PathBuf;
use std::time::Duration;

use super::parsers::{parse_duration_arg, parse_positive_usize};
use super::test_support::parse_test_args;
use super::*;
use crate::error::{AppError, AppResult, ValidationError};
use crate::http::DEFAULT_ENDPOINT;

#[test]
fn defaults_match_documented_values() -> AppResult<()> {
    let (args, _) = parse_test_args(["cfspeed"])?;
    if args.parallel || args.json || args.no_warmup || args.no_yield || args.no_nice {
        return Err(AppError::validation("Boolean flags should default to off"));
    }
    if args.parallel_workers.get() != 2 {
        return Err(AppError::validation(format!(
            "Unexpected worker default: {}",
            args.parallel_workers
        )));
    }
    if args.timeout != Duration::from_secs(60) || args.connect_timeout != Duration::from_secs(10) {
        return Err(AppError::validation("Unexpected timeout defaults"));
    }
    if args.summary_out != PathBuf::from("results/summary.json") {
        return Err(AppError::validation("Unexpected summary output default"));
    }
    if std::env::var_os("CFSPEED_ENDPOINT").is_none() && args.endpoint != DEFAULT_ENDPOINT {
        return Err(AppError::validation("Unexpected endpoint default"));
    }
    if args.summary_table.is_some() {
        return Err(AppError::validation("Summary mode should be off by default"));
    }
    Ok(())
}

#[test]
fn short_flags_map_to_long_options() -> AppResult<()> {
    let (args, _) = parse_test_args(["cfspeed", "-p", "-m", "-s"])?;
    if !args.parallel || !args.minimize_output || !args.single_core {
        return Err(AppError::validation("Short flags were not applied"));
    }
    Ok(())
}

#[test]
fn summary_table_collects_files_and_allows_none() -> AppResult<()> {
    let (args, _) = parse_test_args(["cfspeed", "--summary-table", "a.json", "b.json"])?;
    let files = args.summary_table.unwrap_or_default();
    if files != vec![PathBuf::from("a.json"), PathBuf::from("b.json")] {
        return Err(AppError::validation(format!("Unexpected files: {:?}", files)));
    }
    let (empty, _) = parse_test_args(["cfspeed", "--summary-table"])?;
    if empty.summary_table.as_ref().is_none_or(|files| !files.is_empty()) {
        return Err(AppError::validation("Bare --summary-table should parse as empty"));
    }
    Ok(())
}

#[test]
fn explicit_flags_record_command_line_options_only() -> AppResult<()> {
    let (_, matches) = parse_test_args([
        "cfspeed",
        "--json",
        "-p",
        "--timeout",
        "5s",
        "--mask-sensitive",
    ])?;
    let flags = explicit_flags(&matches);
    let expected = vec![
        "--parallel".to_owned(),
        "--mask-sensitive".to_owned(),
        "--json".to_owned(),
        "--timeout".to_owned(),
    ];
    if flags != expected {
        return Err(AppError::validation(format!("Unexpected flags: {:?}", flags)));
    }
    Ok(())
}

#[test]
fn verbose_covers_debug_and_diagnostics() -> AppResult<()> {
    let (debug, _) = parse_test_args(["cfspeed", "--debug"])?;
    let (diagnostics, _) = parse_test_args(["cfspeed", "--diagnostics"])?;
    let (quiet, _) = parse_test_args(["cfspeed"])?;
    if !debug.verbose() || !diagnostics.verbose() || quiet.verbose() {
        return Err(AppError::validation("Unexpected verbose resolution"));
    }
    Ok(())
}

#[test]
fn duration_parser_supports_units() -> AppResult<()> {
    let cases = [
        ("250ms", Duration::from_millis(250)),
        ("3", Duration::from_secs(3)),
        ("2m", Duration::from_secs(120)),
        ("1h", Duration::from_secs(3600)),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration_arg(input)?;
        if parsed != expected {
            return Err(AppError::validation(format!(
                "{} parsed as {:?}",
                input, parsed
            )));
        }
    }
    Ok(())
}

#[test]
fn duration_parser_rejects_bad_input() -> AppResult<()> {
    let cases = ["", "fast", "0s", "10d"];
    for input in cases {
        match parse_duration_arg(input) {
            Err(AppError::Validation(
                ValidationError::DurationEmpty
                | ValidationError::InvalidDurationFormat { .. }
                | ValidationError::DurationZero
                | ValidationError::InvalidDurationUnit { .. },
            )) => {}
            other => {
                return Err(AppError::validation(format!(
                    "{:?} should be rejected, got {:?}",
                    input, other
                )));
            }
        }
    }
    Ok(())
}

#[test]
fn zero_workers_are_rejected() -> AppResult<()> {
    if !matches!(
        parse_positive_usize("0"),
        Err(AppError::Validation(ValidationError::ParallelWorkersZero))
    ) {
        return Err(AppError::validation("Zero workers should be rejected"));
    }
    if parse_test_args(["cfspeed", "--parallel-workers", "0"]).is_ok() {
        return Err(AppError::validation("clap should surface the parser error"));
    }
    if parse_positive_usize("4")?.get() != 4 {
        return Err(AppError::validation("Expected four workers"));
    }
    Ok(())
}
