//! Centralized constants for the default endpoint, UA and the fixed query shape.

/// Default UA sent when none is configured.
pub(crate) const USER_AGENT: &str = concat!("headlines-rs/", env!("CARGO_PKG_VERSION"));

/// NewsAPI v2 base; endpoint paths are joined onto it.
pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2/";

/// Path of the top-headlines endpoint, relative to the base URL.
pub(crate) const TOP_HEADLINES_PATH: &str = "top-headlines";

/// Header carrying the API credential on every request.
pub(crate) const API_KEY_HEADER: &str = "x-api-key";

/// Language filter sent with every headlines request.
pub const LANGUAGE: &str = "en";

/// Number of articles requested per page.
pub const PAGE_SIZE: u32 = 20;

/// Status the upstream answers with once the free plan's result cap is reached.
pub(crate) const QUOTA_EXCEEDED_STATUS: u16 = 426;

/// User-facing text for [`crate::NewsError::QuotaExceeded`].
pub const QUOTA_EXCEEDED_MESSAGE: &str =
    "Unable to load more articles. The free account type only permits 100 articles";

/// Environment variable holding the API key, read by [`super::NewsClientBuilder::from_env`].
pub const ENV_API_KEY: &str = "NEWSAPI_KEY";

/// Environment variable overriding the base URL, read by [`super::NewsClientBuilder::from_env`].
pub const ENV_BASE_URL: &str = "NEWSAPI_BASE_URL";
