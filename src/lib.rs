//! headlines-rs: async client for paginated news headlines.
//!
//! Two layers:
//! - [`NewsClient`] issues `top-headlines` requests, one page at a time.
//! - [`ArticleRepository`] walks those pages, keeps the merged article list in memory
//!   (minus articles the provider has redacted) and publishes it to subscribers.
//!
//! ```no_run
//! use headlines_rs::{ArticleRepository, FetchOutcome, NewsClient};
//!
//! # async fn run() -> Result<(), headlines_rs::NewsError> {
//! let client = NewsClient::builder().api_key("my-key").build()?;
//! let repo = ArticleRepository::new(client);
//!
//! if let FetchOutcome::Error { message } = repo.fetch_initial().await {
//!     eprintln!("{message}");
//! }
//! for article in repo.articles().iter() {
//!     println!("{}", article.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod headlines;
pub mod repository;

pub use crate::core::{HeadlinesService, NewsClient, NewsClientBuilder, NewsError};
pub use headlines::{Article, HeadlinesBuilder, HeadlinesPage, REMOVED_TITLE, Source, filter_removed};
pub use repository::{ArticleRepository, DEFAULT_ERROR_MESSAGE, FetchOutcome};

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG` (default `headlines_rs=debug`).
///
/// Intended for demos and tests; calling it more than once is harmless.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("headlines_rs=debug"));
    let _ = fmt().with_env_filter(filter).compact().try_init();
}
