use thiserror::Error;

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Failed to pin process to core {core}: {source}")]
    PinCore {
        core: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to lower process priority: {source}")]
    Nice {
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to drop filesystem caches: {source}")]
    DropCaches {
        #[source]
        source: std::io::Error,
    },
    #[error("{operation} is not supported on this platform.")]
    Unsupported { operation: &'static str },
}
