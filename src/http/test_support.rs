use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::HttpError;

use super::transport::{FetchRequest, Transport};

/// Scripted reply for one request.
#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Body(&'static [u8]),
    Empty,
    Status(u16),
}

/// In-memory transport replaying a script; unscripted requests answer `fallback`.
pub(crate) struct ScriptedTransport {
    script: Mutex<VecDeque<Reply>>,
    fallback: Reply,
    delay: Duration,
    seen: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub(crate) fn new(script: Vec<Reply>, fallback: Reply) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback,
            delay: Duration::from_millis(1),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn always(reply: Reply) -> Self {
        Self::new(Vec::new(), reply)
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.seen
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn fetch(&self, request: &FetchRequest) -> Result<Bytes, HttpError> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(format!("{} {}", request.method.as_str(), request.path));
        }
        let reply = self
            .script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or_else(|| self.fallback.clone());
        tokio::time::sleep(self.delay).await;
        match reply {
            Reply::Body(body) => Ok(Bytes::from_static(body)),
            Reply::Empty => Ok(Bytes::new()),
            Reply::Status(status) => Err(HttpError::UnexpectedStatus {
                url: request.path.clone(),
                status,
            }),
        }
    }
}

/// Transport whose replies depend on the request path.
pub(crate) struct RoutedTransport<F>
where
    F: Fn(&FetchRequest) -> Reply + Send + Sync,
{
    route: F,
    seen: Mutex<Vec<String>>,
}

impl<F> RoutedTransport<F>
where
    F: Fn(&FetchRequest) -> Reply + Send + Sync,
{
    pub(crate) const fn new(route: F) -> Self {
        Self {
            route,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.seen
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl<F> Transport for RoutedTransport<F>
where
    F: Fn(&FetchRequest) -> Reply + Send + Sync,
{
    async fn fetch(&self, request: &FetchRequest) -> Result<Bytes, HttpError> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(format!("{} {}", request.method.as_str(), request.path));
        }
        tokio::time::sleep(Duration::from_millis(1)).await;
        match (self.route)(request) {
            Reply::Body(body) => Ok(Bytes::from_static(body)),
            Reply::Empty => Ok(Bytes::new()),
            Reply::Status(status) => Err(HttpError::UnexpectedStatus {
                url: request.path.clone(),
                status,
            }),
        }
    }
}
