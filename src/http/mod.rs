//! HTTP transport used by the measurement engine.
mod client;
mod transport;

#[cfg(test)]
pub(crate) mod test_support;
#[cfg(test)]
mod tests;

pub use client::{DEFAULT_ENDPOINT, HttpTransport, TransportOptions};
pub use transport::{FetchRequest, Method, Transport};
