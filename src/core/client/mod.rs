//! Public client surface + builder.
//! Defaults (endpoint, UA, fixed query values) live in `constants`.

mod constants;

use crate::core::NewsError;
use constants::{API_KEY_HEADER, USER_AGENT};
pub(crate) use constants::{QUOTA_EXCEEDED_STATUS, TOP_HEADLINES_PATH};
pub use constants::{
    DEFAULT_BASE_URL, ENV_API_KEY, ENV_BASE_URL, LANGUAGE, PAGE_SIZE, QUOTA_EXCEEDED_MESSAGE,
};
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use std::time::Duration;
use url::Url;

/// Thin wrapper that holds a configured HTTP client and the API base URL.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: Client,
    base_url: Url,
}

impl NewsClient {
    /// Create a new builder.
    pub fn builder() -> NewsClientBuilder {
        NewsClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// The base URL endpoint paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct NewsClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    api_key: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl NewsClientBuilder {
    /// Start from the process environment: `NEWSAPI_KEY` supplies the API key and
    /// `NEWSAPI_BASE_URL`, when set, overrides the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Url`] if `NEWSAPI_BASE_URL` is set but not a valid URL.
    pub fn from_env() -> Result<Self, NewsError> {
        let mut b = Self::default();
        if let Some(key) = std::env::var(ENV_API_KEY).ok().filter(|k| !k.is_empty()) {
            b = b.api_key(key);
        }
        if let Some(base) = std::env::var(ENV_BASE_URL).ok().filter(|u| !u.is_empty()) {
            b = b.base_url(Url::parse(&base)?);
        }
        Ok(b)
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API base (e.g., `https://newsapi.org/v2/`).
    ///
    /// Endpoint paths are joined onto this URL, so it should end with a `/`.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the API key attached to every request as `X-Api-Key`.
    /// If not set, requests are sent without credentials.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Config`] if the API key is not a valid header value,
    /// [`NewsError::Url`] if the default base URL cannot be parsed, or
    /// [`NewsError::Http`] if the underlying HTTP client fails to initialize.
    pub fn build(self) -> Result<NewsClient, NewsError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut headers = HeaderMap::new();
        if let Some(key) = self.api_key.as_deref() {
            let mut value = HeaderValue::from_str(key)
                .map_err(|_| NewsError::Config("API key is not a valid header value".into()))?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .default_headers(headers);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(NewsClient { http, base_url })
    }
}
