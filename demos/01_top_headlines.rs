use std::time::Duration;

use headlines_rs::{ArticleRepository, FetchOutcome, NewsClientBuilder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    headlines_rs::init_tracing();

    // 1. Build a client from NEWSAPI_KEY / NEWSAPI_BASE_URL with a 10-second timeout.
    let client = NewsClientBuilder::from_env()?
        .timeout(Duration::from_secs(10))
        .build()?;

    // 2. Fetch a single page directly.
    let page = client.top_headlines_page(1).await?;
    println!(
        "--- Page 1: {} articles of {} ---",
        page.articles.len(),
        page.total_results
    );

    // 3. Walk two pages through the repository and watch the collection grow.
    let repo = ArticleRepository::new(client);
    let mut updates = repo.subscribe();

    for load_more in [false, true] {
        let outcome = if load_more {
            repo.fetch_more().await
        } else {
            repo.fetch_initial().await
        };
        if let FetchOutcome::Error { message } = outcome {
            eprintln!("fetch failed: {message}");
            break;
        }
        if updates.has_changed()? {
            println!("collection now holds {} articles", updates.borrow_and_update().len());
        }
    }

    println!("next page to request: {}", repo.current_page());
    println!();

    // 4. Look an article up by position, as a detail view would.
    match repo.get_article_at(0) {
        Ok(article) => {
            println!("--- First article ---");
            println!("{}", article.title);
            println!("{}", article.source.name.as_deref().unwrap_or_default());
            if let Some(ts) = article.published_at_utc() {
                println!("published {}", ts.format("%Y-%m-%d %H:%M UTC"));
            }
            println!("{}", article.url);
        }
        Err(e) => println!("{e}"),
    }

    Ok(())
}
