//! In-memory article collection plus the page cursor.
//!
//! The list and the cursor live in one `watch` value so a reader never sees one
//! without the other; subscribers get a second channel carrying only the list,
//! which is published after the combined state has been committed.

use std::sync::Arc;

use tokio::sync::watch;

use crate::headlines::{Article, HeadlinesPage, filter_removed};

#[derive(Debug, Clone)]
struct State {
    articles: Arc<[Article]>,
    next_page: u32,
    total_results: Option<u64>,
}

/// Holds the current article list and the next page to request.
///
/// Writers must be serialized by the owner; readers may look at any time and always
/// see the result of the most recent successful merge.
#[derive(Debug)]
pub(crate) struct ArticleStore {
    state: watch::Sender<State>,
    published: watch::Sender<Arc<[Article]>>,
}

impl ArticleStore {
    pub(crate) fn new() -> Self {
        let empty: Arc<[Article]> = Arc::from(Vec::<Article>::new());
        Self {
            state: watch::Sender::new(State {
                articles: Arc::clone(&empty),
                next_page: 1,
                total_results: None,
            }),
            published: watch::Sender::new(empty),
        }
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Arc<[Article]>> {
        self.published.subscribe()
    }

    pub(crate) fn snapshot(&self) -> Arc<[Article]> {
        Arc::clone(&self.state.borrow().articles)
    }

    /// The article at `index`, or the collection length it was checked against.
    pub(crate) fn get(&self, index: usize) -> Result<Article, usize> {
        let state = self.state.borrow();
        state
            .articles
            .get(index)
            .cloned()
            .ok_or(state.articles.len())
    }

    pub(crate) fn len(&self) -> usize {
        self.state.borrow().articles.len()
    }

    pub(crate) fn next_page(&self) -> u32 {
        self.state.borrow().next_page
    }

    pub(crate) fn total_results(&self) -> Option<u64> {
        self.state.borrow().total_results
    }

    /// Replaces the collection with the page's surviving articles and advances the cursor.
    pub(crate) fn replace(&self, page: HeadlinesPage) {
        let fresh = filter_removed(page.articles);
        self.commit(Arc::from(fresh), page.total_results);
    }

    /// Appends the page's surviving articles after the existing ones and advances the cursor.
    pub(crate) fn append(&self, page: HeadlinesPage) {
        let fresh = filter_removed(page.articles);
        let current = self.snapshot();
        let mut combined = Vec::with_capacity(current.len() + fresh.len());
        combined.extend_from_slice(&current);
        combined.extend(fresh);
        self.commit(Arc::from(combined), page.total_results);
    }

    fn commit(&self, articles: Arc<[Article]>, total_results: u64) {
        self.state.send_modify(|s| {
            s.articles = Arc::clone(&articles);
            s.next_page = s.next_page.saturating_add(1);
            s.total_results = Some(total_results);
        });
        self.published.send_replace(articles);
    }
}
