use serde::Deserialize;

/// Success body. `articles` and the required record fields have no fallback: a body
/// without them is a decode error rather than an empty page.
#[derive(Deserialize)]
pub(crate) struct TopHeadlinesEnvelope {
    pub(crate) status: Option<String>,
    #[serde(rename = "totalResults")]
    pub(crate) total_results: Option<u64>,
    pub(crate) articles: Vec<ArticleRecord>,
}

/// Body returned alongside non-2xx statuses, e.g.
/// `{"status":"error","code":"maximumResultsReached","message":"..."}`.
#[derive(Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub(crate) message: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct ArticleRecord {
    pub(crate) source: Option<SourceRecord>,
    pub(crate) author: Option<String>,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) url: String,
    #[serde(rename = "urlToImage")]
    pub(crate) url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub(crate) published_at: String,
    pub(crate) content: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct SourceRecord {
    pub(crate) id: Option<String>,
    pub(crate) name: Option<String>,
}
