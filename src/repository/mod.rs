//! Paginated article repository.
//!
//! [`ArticleRepository`] owns the page cursor and the article collection, fetches pages
//! through a [`HeadlinesService`], drops redacted articles, and publishes every change
//! to subscribers.

mod store;

use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use crate::core::{HeadlinesService, NewsClient, NewsError};
use crate::headlines::Article;
use store::ArticleStore;

/// Message used when a failure carries no description of its own.
pub const DEFAULT_ERROR_MESSAGE: &str = "An unknown error occurred, try again later";

/// Result of a fetch operation. Failures never escape the repository in any other form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page was fetched and merged into the collection.
    Success,
    /// The page could not be fetched; the collection and cursor are unchanged.
    Error {
        /// User-facing description of the failure.
        message: String,
    },
}

impl FetchOutcome {
    /// An error outcome carrying [`DEFAULT_ERROR_MESSAGE`].
    #[must_use]
    pub fn error_default() -> Self {
        Self::Error {
            message: DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }

    /// Returns `true` for [`FetchOutcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<&NewsError> for FetchOutcome {
    fn from(e: &NewsError) -> Self {
        if let NewsError::UpstreamUnspecified { .. } = e {
            return Self::error_default();
        }
        let message = e.to_string();
        if message.is_empty() {
            Self::error_default()
        } else {
            Self::Error { message }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Merge {
    Replace,
    Append,
}

/// Stateful, paginated view over top headlines.
///
/// The cursor starts at page 1 and moves forward by one after every successful fetch.
/// Fetches on the same repository are single-flight: a second caller waits until the
/// first has merged its page, so the cursor and the replace/append order can never
/// interleave. Share one instance behind an [`Arc`] when several tasks need it.
#[derive(Debug)]
pub struct ArticleRepository<S = NewsClient> {
    service: S,
    store: ArticleStore,
    in_flight: Mutex<()>,
}

impl<S: HeadlinesService> ArticleRepository<S> {
    /// Creates an empty repository positioned on page 1.
    pub fn new(service: S) -> Self {
        Self {
            service,
            store: ArticleStore::new(),
            in_flight: Mutex::new(()),
        }
    }

    /// The service pages are fetched through.
    pub const fn service(&self) -> &S {
        &self.service
    }

    /// Fetches the page at the cursor and replaces the collection with it.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn fetch_initial(&self) -> FetchOutcome {
        self.fetch(Merge::Replace).await
    }

    /// Fetches the page at the cursor and appends it to the collection.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn fetch_more(&self) -> FetchOutcome {
        self.fetch(Merge::Append).await
    }

    async fn fetch(&self, merge: Merge) -> FetchOutcome {
        let _guard = self.in_flight.lock().await;
        let page = self.store.next_page();

        match self.service.fetch_headlines_page(page).await {
            Ok(headlines) => {
                match merge {
                    Merge::Replace => self.store.replace(headlines),
                    Merge::Append => self.store.append(headlines),
                }
                #[cfg(feature = "tracing")]
                tracing::debug!(page, ?merge, len = self.store.len(), "merged headlines page");
                FetchOutcome::Success
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(page, error = %e, "headlines fetch failed");
                FetchOutcome::from(&e)
            }
        }
    }

    /// Returns a copy of the article at `index` in the current collection.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::ArticleNotFound`] when `index` is past the end.
    pub fn get_article_at(&self, index: usize) -> Result<Article, NewsError> {
        self.store
            .get(index)
            .map_err(|len| NewsError::ArticleNotFound { index, len })
    }

    /// The current collection.
    pub fn articles(&self) -> Arc<[Article]> {
        self.store.snapshot()
    }

    /// Subscribes to the collection. The receiver is marked changed after every
    /// successful fetch; failed fetches never notify.
    pub fn subscribe(&self) -> watch::Receiver<Arc<[Article]>> {
        self.store.subscribe()
    }

    /// The page the next fetch will request.
    pub fn current_page(&self) -> u32 {
        self.store.next_page()
    }

    /// Total result count from the most recent successful fetch.
    pub fn total_results(&self) -> Option<u64> {
        self.store.total_results()
    }

    /// Number of articles in the collection.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
