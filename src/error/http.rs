use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Invalid endpoint '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Endpoint '{url}' must use http or https.")]
    UnsupportedScheme { url: String },
    #[error("Failed to join path '{path}': {source}")]
    JoinPathFailed {
        path: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to {url} failed: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Reading body from {url} failed: {source}")]
    ReadBodyFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Unexpected status {status} from {url}.")]
    UnexpectedStatus { url: String, status: u16 },
    #[error("Empty response body from {url}.")]
    EmptyBody { url: String },
    #[error("Response from {url} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        url: String,
        #[source]
        source: std::str::Utf8Error,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
