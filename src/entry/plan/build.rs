use cfspeed::args::BenchArgs;
use cfspeed::error::{AppError, AppResult, ValidationError};

use super::types::{BenchmarkPlan, RunPlan, SummaryPlan};

pub(crate) fn build_plan(mut args: BenchArgs, flags: Vec<String>) -> AppResult<RunPlan> {
    if let Some(files) = args.summary_table.take() {
        if files.is_empty() {
            tracing::error!("--summary-table requires at least one JSON file as argument.");
            return Err(AppError::validation(
                ValidationError::SummaryTableMissingFiles,
            ));
        }
        return Ok(RunPlan::SummaryTable(SummaryPlan {
            files,
            out: args.summary_out,
            diagnostics: args.diagnostics,
        }));
    }

    if args.show_sysinfo_only {
        return Ok(RunPlan::SysinfoOnly {
            mask_sensitive: args.mask_sensitive,
        });
    }

    Ok(RunPlan::Benchmark(Box::new(BenchmarkPlan { args, flags })))
}
