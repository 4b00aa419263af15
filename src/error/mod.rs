mod app;
mod config;
mod http;
mod summary;
mod system;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use http::HttpError;
pub use summary::SummaryError;
pub use system::SystemError;
pub use validation::ValidationError;
