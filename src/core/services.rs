use crate::core::NewsError;
use crate::headlines::HeadlinesPage;

/// A trait for services that can fetch one page of top headlines.
///
/// This is the seam between the repository and the network: [`ArticleRepository`]
/// only ever talks to a `HeadlinesService`, which makes it easy to drive from
/// scripted pages in tests. It is implemented by [`NewsClient`].
///
/// [`ArticleRepository`]: crate::ArticleRepository
/// [`NewsClient`]: crate::NewsClient
pub trait HeadlinesService: Send + Sync {
    /// Asynchronously fetches a single page of headlines.
    ///
    /// # Arguments
    /// * `page` - The 1-based page number to request.
    ///
    /// # Returns
    /// A `Future` that resolves to a `Result` containing either a `HeadlinesPage` on success
    /// or a `NewsError` on failure.
    fn fetch_headlines_page(
        &self,
        page: u32,
    ) -> core::pin::Pin<
        Box<dyn core::future::Future<Output = Result<HeadlinesPage, NewsError>> + Send + '_>,
    >;
}
