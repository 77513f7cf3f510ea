use std::time::Duration;

use headlines_rs::{NewsClient, NewsError, core::client::QUOTA_EXCEEDED_MESSAGE};
use httpmock::MockServer;
use url::Url;

use crate::common::{client_for, fixture, mock_page};

#[tokio::test]
async fn status_426_without_message_maps_to_quota_exceeded() {
    let server = MockServer::start();
    let mock = mock_page(&server, 6, 426, "");

    let err = client_for(&server).top_headlines_page(6).await.unwrap_err();

    mock.assert();
    assert!(matches!(err, NewsError::QuotaExceeded), "got {err:?}");
    assert_eq!(err.to_string(), QUOTA_EXCEEDED_MESSAGE);
}

#[tokio::test]
async fn server_message_is_surfaced_verbatim() {
    let server = MockServer::start();
    let body = fixture("top_headlines_error", "apiKeyInvalid", "json");
    let mock = mock_page(&server, 1, 401, &body);

    let err = client_for(&server).top_headlines_page(1).await.unwrap_err();

    mock.assert();
    match err {
        NewsError::Upstream { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(
                message,
                "Your API key is invalid or incorrect. Check your key, or go to https://newsapi.org to create a free API key."
            );
        }
        other => panic!("expected Upstream, got {other:?}"),
    }
}

#[tokio::test]
async fn server_message_wins_over_quota_status() {
    let server = MockServer::start();
    let body = fixture("top_headlines_error", "maximumResultsReached", "json");
    let mock = mock_page(&server, 6, 426, &body);

    let err = client_for(&server).top_headlines_page(6).await.unwrap_err();

    mock.assert();
    match err {
        NewsError::Upstream { status, message } => {
            assert_eq!(status, 426);
            assert!(message.starts_with("You have requested too many results."));
        }
        other => panic!("expected Upstream, got {other:?}"),
    }
}

#[tokio::test]
async fn other_status_without_message_is_unspecified() {
    let server = MockServer::start();
    let mock = mock_page(&server, 1, 500, "oops");

    let err = client_for(&server).top_headlines_page(1).await.unwrap_err();

    mock.assert();
    match err {
        NewsError::UpstreamUnspecified { status, url } => {
            assert_eq!(status, 500);
            assert!(url.contains("/top-headlines"));
            assert!(url.contains("page=1"));
        }
        other => panic!("expected UpstreamUnspecified, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_failure_maps_to_http_error() {
    // nothing listens on port 1
    let client = NewsClient::builder()
        .base_url(Url::parse("http://127.0.0.1:1/").unwrap())
        .build()
        .unwrap();

    let err = client.top_headlines_page(1).await.unwrap_err();

    match err {
        NewsError::Http(e) => assert!(e.is_connect() || e.is_request(), "got {e:?}"),
        other => panic!("expected Http, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_upstream_hits_client_timeout() {
    let server = MockServer::start();
    let _slow = server.mock(|when, then| {
        when.path("/top-headlines");
        then.status(200)
            .delay(Duration::from_millis(500))
            .body(r#"{"status":"ok","totalResults":0,"articles":[]}"#);
    });

    let client = NewsClient::builder()
        .base_url(Url::parse(&format!("{}/", server.base_url())).unwrap())
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = client.top_headlines_page(1).await.unwrap_err();

    match err {
        NewsError::Http(e) => assert!(e.is_timeout(), "got {e:?}"),
        other => panic!("expected Http timeout, got {other:?}"),
    }
}
