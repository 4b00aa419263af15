use std::sync::Arc;

use tracing::{error, info, warn};

use cfspeed::args::BenchArgs;
use cfspeed::bench::{BenchConfig, Console, run_benchmark};
use cfspeed::error::{AppError, AppResult};
use cfspeed::http::{HttpTransport, Transport, TransportOptions};
use cfspeed::measure::{Engine, Meter};
use cfspeed::snapshot::to_json;
use cfspeed::summary::{load_rows, locate_unserializable_row, render_table, write_summary};
use cfspeed::system::process::{self, NICE_VALUE};
use cfspeed::system::sysinfo::{collect_sysinfo, print_sysinfo};

use super::types::{BenchmarkPlan, RunPlan, SummaryPlan};

pub(crate) async fn execute_plan(plan: RunPlan) -> AppResult<()> {
    match plan {
        RunPlan::SummaryTable(summary) => run_summary(&summary),
        RunPlan::SysinfoOnly { mask_sensitive } => {
            print_sysinfo(mask_sensitive);
            Ok(())
        }
        RunPlan::Benchmark(bench) => run_bench(*bench).await,
    }
}

fn run_summary(plan: &SummaryPlan) -> AppResult<()> {
    let rows = load_rows(&plan.files, plan.diagnostics);
    print!("{}", render_table(&rows));

    if let Err(err) = write_summary(&rows, &plan.out) {
        error!("Failed to write summary '{}': {}", plan.out.display(), err);
        if plan.diagnostics
            && let Some((index, cause)) = locate_unserializable_row(&rows)
        {
            error!("[DIAG] Row {} cannot be serialized: {}", index, cause);
        }
        return Err(AppError::summary(err));
    }
    info!("Summary written to {}", plan.out.display());
    Ok(())
}

async fn run_bench(plan: BenchmarkPlan) -> AppResult<()> {
    let BenchmarkPlan { args, flags } = plan;

    let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(
        &args.endpoint,
        TransportOptions {
            request_timeout: args.timeout,
            connect_timeout: args.connect_timeout,
        },
    )?);
    let meter = Meter::new(transport);
    let config = BenchConfig {
        engine: Engine::detect(args.parallel, args.parallel_workers),
        warm_up: !args.no_warmup,
        yield_between: !args.no_yield,
        mask_sensitive: args.mask_sensitive,
        flags,
    };
    let console = Console::new(args.json, args.minimize_output, args.no_color);

    let snapshot = run_benchmark(
        &meter,
        &config,
        &console,
        collect_sysinfo(args.mask_sensitive),
    )
    .await;

    if args.json {
        println!("{}", to_json(&snapshot)?);
    } else if args.show_flags_used {
        println!("[FLAGS] Used: {}", snapshot.flags.join(" "));
    }
    Ok(())
}

/// Host report and scheduling tweaks that must happen before the runtime exists.
///
/// Affinity and niceness are per thread on Linux; worker threads only inherit
/// them when they are spawned afterwards.
pub(crate) fn prepare_process(plan: &RunPlan) {
    if let RunPlan::Benchmark(bench) = plan {
        if bench.args.show_sysinfo {
            print_sysinfo(bench.args.mask_sensitive);
        }
        tune_process(&bench.args);
    }
}

/// Scheduling tweaks are best effort: failures are logged and the run continues.
fn tune_process(args: &BenchArgs) {
    if args.single_core
        && let Err(err) = process::pin_to_core(0)
    {
        warn!("{}", err);
    }
    if !args.no_nice
        && let Err(err) = process::set_nice(NICE_VALUE)
    {
        warn!("{}", err);
    }
    if args.drop_caches
        && let Err(err) = process::drop_caches()
    {
        warn!("{}", err);
    }
}
