//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
mod flags;
pub(crate) mod parsers;

#[cfg(test)]
pub(crate) mod test_support;
#[cfg(test)]
mod tests;

pub use cli::BenchArgs;
pub use flags::explicit_flags;

pub(crate) use defaults::DEFAULT_CONFIG_FILES;
