use clap::parser::ValueSource;
use clap::{ArgMatches, CommandFactory};

use super::BenchArgs;

/// Long names of the options set on the command line, in declaration order.
///
/// Values are not recorded, only the flag (e.g. `--summary-table`).
#[must_use]
pub fn explicit_flags(matches: &ArgMatches) -> Vec<String> {
    BenchArgs::command()
        .get_arguments()
        .filter(|arg| {
            matches.value_source(arg.get_id().as_str()) == Some(ValueSource::CommandLine)
        })
        .filter_map(|arg| arg.get_long().map(|long| format!("--{}", long)))
        .collect()
}
