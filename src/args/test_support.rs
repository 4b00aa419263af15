use clap::{CommandFactory, FromArgMatches};

use crate::error::{AppError, AppResult};

use super::BenchArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<(BenchArgs, clap::ArgMatches)>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = BenchArgs::command()
        .try_get_matches_from(args)
        .map_err(AppError::from)?;
    let args = BenchArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}
