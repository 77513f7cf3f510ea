#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::time::Duration;
use std::{fs, path::Path};

use headlines_rs::{Article, HeadlinesPage, HeadlinesService, NewsClient, NewsError, Source};
use httpmock::{Method::GET, Mock, MockServer};
use url::Url;

pub const API_KEY: &str = "test-key";

pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let path = dir.join(format!("{endpoint}_{key}.{ext}"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn client_for(server: &MockServer) -> NewsClient {
    NewsClient::builder()
        .base_url(Url::parse(&format!("{}/", server.base_url())).unwrap())
        .api_key(API_KEY)
        .build()
        .unwrap()
}

/// Mocks `GET /top-headlines` for one page with the fixed query and credential.
pub fn mock_page<'a>(server: &'a MockServer, page: u32, status: u16, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/top-headlines")
            .query_param("language", "en")
            .query_param("pageSize", "20")
            .query_param("page", page.to_string())
            .header("x-api-key", API_KEY);
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn article(title: &str) -> Article {
    Article {
        title: title.to_string(),
        description: None,
        content: None,
        author: None,
        url: format!("https://example.com/{}", title.replace(' ', "-")),
        url_to_image: None,
        published_at: "2024-03-01T10:15:00Z".to_string(),
        source: Source::default(),
    }
}

pub fn page_of(titles: &[&str]) -> HeadlinesPage {
    HeadlinesPage {
        articles: titles.iter().map(|t| article(t)).collect(),
        total_results: 100,
        status: "ok".to_string(),
    }
}

pub fn titles(articles: &[Article]) -> Vec<String> {
    articles.iter().map(|a| a.title.clone()).collect()
}

/// A `HeadlinesService` that replays a fixed script of results and records requested pages.
pub struct ScriptedService {
    script: Mutex<VecDeque<Result<HeadlinesPage, NewsError>>>,
    requested: Mutex<Vec<u32>>,
    delay: Option<Duration>,
}

impl ScriptedService {
    pub fn new(script: Vec<Result<HeadlinesPage, NewsError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requested: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requested(&self) -> Vec<u32> {
        self.requested.lock().unwrap().clone()
    }
}

impl HeadlinesService for ScriptedService {
    fn fetch_headlines_page(
        &self,
        page: u32,
    ) -> Pin<Box<dyn Future<Output = Result<HeadlinesPage, NewsError>> + Send + '_>> {
        self.requested.lock().unwrap().push(page);
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .expect("script exhausted");
        let delay = self.delay;
        Box::pin(async move {
            if let Some(d) = delay {
                tokio::time::sleep(d).await;
            }
            next
        })
    }
}
