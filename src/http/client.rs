use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, redirect};
use tracing::debug;
use url::Url;

use crate::error::{AppError, AppResult, HttpError};

use super::transport::{FetchRequest, Method, Transport};

pub const DEFAULT_ENDPOINT: &str = "https://speed.cloudflare.com";

const DEFAULT_USER_AGENT: &str = concat!("cfspeed/", env!("CARGO_PKG_VERSION"));

/// Redirect hops followed before a request is treated as failed.
const REDIRECT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy)]
pub struct TransportOptions {
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// reqwest-backed transport bound to a single endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base: Url,
}

impl HttpTransport {
    /// Builds the HTTP client for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint is not an http(s) URL or the client
    /// cannot be built.
    pub fn new(endpoint: &str, options: TransportOptions) -> AppResult<Self> {
        let base = Url::parse(endpoint).map_err(|err| {
            AppError::http(HttpError::InvalidEndpoint {
                url: endpoint.to_owned(),
                source: err,
            })
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(AppError::http(HttpError::UnsupportedScheme {
                url: endpoint.to_owned(),
            }));
        }

        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(options.request_timeout)
            .connect_timeout(options.connect_timeout)
            .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
            .build()
            .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))?;

        Ok(Self { client, base })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.base
    }

    fn resolve(&self, path: &str) -> Result<Url, HttpError> {
        self.base
            .join(path)
            .map_err(|err| HttpError::JoinPathFailed {
                path: path.to_owned(),
                source: err,
            })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, request: &FetchRequest) -> Result<Bytes, HttpError> {
        let url = self.resolve(&request.path)?;
        let builder = match request.method {
            Method::Get => self.client.get(url.clone()),
            Method::Post => {
                let body = request.body.clone().unwrap_or_default();
                self.client.post(url.clone()).body(body)
            }
        };

        let response = builder
            .send()
            .await
            .map_err(|err| HttpError::RequestFailed {
                url: url.to_string(),
                source: err,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| HttpError::ReadBodyFailed {
                url: url.to_string(),
                source: err,
            })?;
        debug!(
            "{} {} -> {} ({} bytes)",
            request.method.as_str(),
            url,
            status.as_u16(),
            body.len()
        );
        Ok(body)
    }
}
