use headlines_rs::{NewsClientBuilder, core::client::PAGE_SIZE};

#[tokio::test]
#[ignore]
async fn live_top_headlines_smoke() {
    if std::env::var("NEWSAPI_KEY").is_err() {
        return;
    }

    let client = NewsClientBuilder::from_env().unwrap().build().unwrap();
    let page = client.top_headlines_page(1).await.unwrap();

    assert_eq!(page.status, "ok");
    assert!(page.articles.len() <= PAGE_SIZE as usize);
    assert!(page.articles.iter().all(|a| !a.url.is_empty()));
}
