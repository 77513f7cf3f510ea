use crate::{
    core::{
        NewsClient, NewsError,
        client::{LANGUAGE, PAGE_SIZE, QUOTA_EXCEEDED_STATUS, TOP_HEADLINES_PATH},
        net,
    },
    headlines::{
        model::{Article, HeadlinesPage, Source},
        wire,
    },
};

pub(super) async fn fetch_page(client: &NewsClient, page: u32) -> Result<HeadlinesPage, NewsError> {
    if page == 0 {
        return Err(NewsError::InvalidPage(page));
    }

    let mut url = client.base_url().join(TOP_HEADLINES_PATH)?;
    url.query_pairs_mut()
        .append_pair("language", LANGUAGE)
        .append_pair("pageSize", &PAGE_SIZE.to_string())
        .append_pair("page", &page.to_string());

    #[cfg(feature = "tracing")]
    tracing::debug!(%url, page, "requesting top headlines");

    let resp = client
        .http()
        .get(url.clone())
        .header("accept", "application/json")
        .send()
        .await?;

    let status = resp.status();
    let body = net::read_body(resp, "top_headlines", &format!("page{page}")).await?;

    if !status.is_success() {
        let err = map_status_error(status.as_u16(), url.as_str(), &body);
        #[cfg(feature = "tracing")]
        tracing::warn!(status = status.as_u16(), error = %err, "top headlines request failed");
        return Err(err);
    }

    let envelope: wire::TopHeadlinesEnvelope = serde_json::from_str(&body)?;

    let articles = envelope
        .articles
        .into_iter()
        .map(Article::from)
        .collect();

    Ok(HeadlinesPage {
        articles,
        total_results: envelope.total_results.unwrap_or_default(),
        status: envelope.status.unwrap_or_default(),
    })
}

/// A server-supplied message wins; otherwise 426 means the plan's cap was hit.
fn map_status_error(status: u16, url: &str, body: &str) -> NewsError {
    let message = serde_json::from_str::<wire::ErrorEnvelope>(body)
        .ok()
        .and_then(|e| e.message)
        .filter(|m| !m.is_empty());

    match (message, status) {
        (Some(message), _) => NewsError::Upstream { status, message },
        (None, QUOTA_EXCEEDED_STATUS) => NewsError::QuotaExceeded,
        (None, _) => NewsError::UpstreamUnspecified {
            status,
            url: url.to_string(),
        },
    }
}

impl From<wire::ArticleRecord> for Article {
    fn from(r: wire::ArticleRecord) -> Self {
        Self {
            title: r.title,
            description: r.description,
            content: r.content,
            author: r.author,
            url: r.url,
            url_to_image: r.url_to_image,
            published_at: r.published_at,
            source: r
                .source
                .map(|s| Source {
                    id: s.id,
                    name: s.name,
                })
                .unwrap_or_default(),
        }
    }
}
