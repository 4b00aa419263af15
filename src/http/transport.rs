use async_trait::async_trait;
use bytes::Bytes;

use crate::error::HttpError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// One request against the benchmark endpoint. `path` includes the query.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Bytes>,
}

impl FetchRequest {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    #[must_use]
    pub fn post(path: impl Into<String>, body: Bytes) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }

    /// Download request for `bytes` bytes.
    #[must_use]
    pub fn download(bytes: u64) -> Self {
        Self::get(format!("/__down?bytes={}", bytes))
    }

    /// Upload request carrying `bytes` ASCII zeros.
    #[must_use]
    pub fn upload(bytes: u64) -> Self {
        let len = usize::try_from(bytes).unwrap_or(usize::MAX);
        Self::post("/__up", Bytes::from(vec![b'0'; len]))
    }
}

/// Single-shot transfer capability consumed by the measurement engine.
///
/// Implementations own their timeouts; the engine imposes no deadline.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs the request and returns the full response body.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be sent, the status is not
    /// successful, or the body cannot be read.
    async fn fetch(&self, request: &FetchRequest) -> Result<Bytes, HttpError>;
}
