mod plan;


use clap::{ArgMatches, CommandFactory, FromArgMatches};

use cfspeed::args::{BenchArgs, explicit_flags};
use cfspeed::config::{apply_config, load_config};
use cfspeed::error::AppResult;
use plan::{build_plan, execute_plan, prepare_process};

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;
    let flags = explicit_flags(&matches);
    apply_config_file(&mut args, &matches)?;

    cfspeed::system::logger::init_logging(args.verbose(), args.no_color);

    let plan = build_plan(args, flags)?;
    prepare_process(&plan);

    build_runtime()?.block_on(execute_plan(plan))
}

fn build_runtime() -> AppResult<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}

fn parse_args() -> AppResult<(BenchArgs, ArgMatches)> {
    let matches = BenchArgs::command().get_matches();
    let args = BenchArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn apply_config_file(args: &mut BenchArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(args, matches, &config)?;
    }
    Ok(())
}
