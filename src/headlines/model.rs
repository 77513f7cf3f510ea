use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::headlines::REMOVED_TITLE;

/// The outlet an article was published by.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Source {
    /// Provider-side identifier (e.g. `"bbc-news"`); absent for most small outlets.
    pub id: Option<String>,
    /// Display name (e.g. `"BBC News"`).
    pub name: Option<String>,
}

/// A single news item from a headlines page.
///
/// Articles carry no identifier of their own; two articles are the same when all fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Article {
    /// The headline.
    pub title: String,
    /// A short summary.
    pub description: Option<String>,
    /// The (usually truncated) body text.
    pub content: Option<String>,
    /// The author or byline.
    pub author: Option<String>,
    /// A direct link to the full article.
    pub url: String,
    /// A link to the lead image.
    pub url_to_image: Option<String>,
    /// Publication time as sent by the provider, typically RFC 3339 (`2024-03-01T10:15:00Z`).
    pub published_at: String,
    /// The publishing outlet.
    pub source: Source,
}

impl Article {
    /// Parses [`Article::published_at`] as an RFC 3339 timestamp.
    ///
    /// Returns `None` when the provider sent something unparseable.
    #[must_use]
    pub fn published_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.published_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Whether the provider has redacted this article.
    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.title == REMOVED_TITLE
    }
}

/// One page of top headlines, in API order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadlinesPage {
    /// The articles on this page, unfiltered.
    pub articles: Vec<Article>,
    /// Total number of results the provider reports across all pages.
    pub total_results: u64,
    /// The provider's status string (`"ok"` on success).
    pub status: String,
}
