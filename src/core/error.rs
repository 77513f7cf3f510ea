use thiserror::Error;

use crate::core::client::QUOTA_EXCEEDED_MESSAGE;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum NewsError {
    /// An error occurred during an HTTP request (timeout, DNS, connection reset, ...).
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body could not be decoded as JSON.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The upstream rejected the request because the plan's result cap was reached (HTTP 426).
    #[error("{}", QUOTA_EXCEEDED_MESSAGE)]
    QuotaExceeded,

    /// The upstream returned a non-2xx status together with an error message.
    #[error("{message}")]
    Upstream {
        /// The HTTP status code.
        status: u16,
        /// The message supplied by the server, verbatim.
        message: String,
    },

    /// The upstream returned a non-2xx status without any usable message.
    #[error("Unexpected response status: {status} at {url}")]
    UpstreamUnspecified {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// Pages are 1-based; page zero was requested.
    #[error("invalid page {0}: pages start at 1")]
    InvalidPage(u32),

    /// No article exists at the requested position.
    #[error("Article Not Found: index {index} out of bounds for {len} articles")]
    ArticleNotFound {
        /// The requested zero-based position.
        index: usize,
        /// The collection length at lookup time.
        len: usize,
    },

    /// The client configuration is unusable (e.g. a header value with invalid characters).
    #[error("Invalid configuration: {0}")]
    Config(String),
}
