mod api;
mod model;
mod wire;

pub use model::{Article, HeadlinesPage, Source};

use crate::core::{HeadlinesService, NewsClient, NewsError};

/// Title the provider substitutes for articles it has redacted.
///
/// This is a convention of the upstream API rather than something this crate defines.
pub const REMOVED_TITLE: &str = "[Removed]";

/// Drops every article whose title is [`REMOVED_TITLE`], preserving order.
///
/// Applying it more than once yields the same result as applying it once.
#[must_use]
pub fn filter_removed(articles: Vec<Article>) -> Vec<Article> {
    articles.into_iter().filter(|a| !a.is_removed()).collect()
}

/// A builder for fetching a single page of top headlines.
pub struct HeadlinesBuilder {
    client: NewsClient,
    page: u32,
}

impl HeadlinesBuilder {
    /// Creates a new `HeadlinesBuilder` requesting the first page.
    pub fn new(client: &NewsClient) -> Self {
        Self {
            client: client.clone(),
            page: 1,
        }
    }

    /// Sets the 1-based page to request.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Executes the request and fetches the page.
    ///
    /// # Errors
    ///
    /// Returns a `NewsError` if the page number is zero, if the upstream answers with a
    /// non-2xx status, if the response cannot be parsed, or if there's a network issue.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(page = self.page)))]
    pub async fn fetch(self) -> Result<HeadlinesPage, NewsError> {
        api::fetch_page(&self.client, self.page).await
    }
}

impl NewsClient {
    /// Fetches one page of English top headlines, [`PAGE_SIZE`] articles per page.
    ///
    /// No retry is attempted and nothing is cached.
    ///
    /// # Errors
    ///
    /// See [`HeadlinesBuilder::fetch`].
    ///
    /// [`PAGE_SIZE`]: crate::core::client::PAGE_SIZE
    pub async fn top_headlines_page(&self, page: u32) -> Result<HeadlinesPage, NewsError> {
        HeadlinesBuilder::new(self).page(page).fetch().await
    }
}

impl HeadlinesService for NewsClient {
    fn fetch_headlines_page(
        &self,
        page: u32,
    ) -> core::pin::Pin<
        Box<dyn core::future::Future<Output = Result<HeadlinesPage, NewsError>> + Send + '_>,
    > {
        Box::pin(self.top_headlines_page(page))
    }
}
