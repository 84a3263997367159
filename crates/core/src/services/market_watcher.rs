use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::models::market::{MarketSnapshot, NewsArticle};
use crate::providers::traits::{MarketDataProvider, NewsProvider};

/// How many listing rows a refresh requests.
const LISTING_LIMIT: usize = 50;

/// How many news articles a refresh requests.
const NEWS_LIMIT: usize = 20;

/// Search query for the news feed.
const NEWS_QUERY: &str = "cryptocurrency OR bitcoin OR ethereum";

/// Periodically refreshes market data and news, holding the latest
/// snapshot for consumers to read.
///
/// Failure semantics: a failed refresh records the error on the snapshot
/// (surfaced as a retryable banner) and keeps the previous data; a failed
/// news fetch substitutes the single fallback article. A manual retry is
/// just another call to [`MarketWatcher::refresh`].
///
/// The periodic task awaits each refresh before sleeping, so two
/// refreshes can never overlap. It is cancelled through the handle
/// returned by [`MarketWatcher::spawn`]; once the handle is stopped or
/// dropped, no further result is ever applied.
pub struct MarketWatcher {
    market: Arc<dyn MarketDataProvider>,
    news: Arc<dyn NewsProvider>,
    snapshot: Arc<Mutex<MarketSnapshot>>,
}

impl MarketWatcher {
    pub fn new(market: Arc<dyn MarketDataProvider>, news: Arc<dyn NewsProvider>) -> Self {
        Self {
            market,
            news,
            snapshot: Arc::new(Mutex::new(MarketSnapshot::default())),
        }
    }

    /// A copy of the latest snapshot.
    #[must_use]
    pub fn snapshot(&self) -> MarketSnapshot {
        self.snapshot
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Fetch listings, global stats, and news, replacing the snapshot
    /// wholesale on success.
    pub async fn refresh(&self) {
        Self::refresh_inner(&self.market, &self.news, &self.snapshot).await;
    }

    /// Start the periodic refresh task. The first refresh runs
    /// immediately; subsequent ones every `interval`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(&self, interval: Duration) -> WatcherHandle {
        let (cancel_tx, mut cancel_rx) = watch::channel(false);
        let market = Arc::clone(&self.market);
        let news = Arc::clone(&self.news);
        let snapshot = Arc::clone(&self.snapshot);

        let task = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = Self::refresh_inner(&market, &news, &snapshot) => {}
                    _ = cancel_rx.changed() => break,
                }
                tokio::select! {
                    _ = tokio::time::sleep(interval) => {}
                    _ = cancel_rx.changed() => break,
                }
            }
            debug!("market watcher stopped");
        });

        WatcherHandle {
            cancel: cancel_tx,
            task: Some(task),
        }
    }

    async fn refresh_inner(
        market: &Arc<dyn MarketDataProvider>,
        news: &Arc<dyn NewsProvider>,
        snapshot: &Arc<Mutex<MarketSnapshot>>,
    ) {
        let listings = market.fetch_listings(LISTING_LIMIT).await;
        let global = market.fetch_global().await;

        // News degrades independently: any failure substitutes the
        // hard-coded fallback article.
        let articles = match news.fetch_articles(NEWS_QUERY, NEWS_LIMIT).await {
            Ok(articles) if !articles.is_empty() => articles,
            Ok(_) => vec![NewsArticle::fallback()],
            Err(e) => {
                warn!(provider = news.name(), error = %e, "news fetch failed, using fallback");
                vec![NewsArticle::fallback()]
            }
        };

        let mut snap = snapshot.lock().unwrap_or_else(|e| e.into_inner());
        match listings {
            Ok(listings) => {
                snap.listings = listings;
                snap.global = global.ok();
                snap.news = articles;
                snap.last_error = None;
                snap.last_updated = Some(Utc::now());
            }
            Err(e) => {
                warn!(provider = market.name(), error = %e, "market refresh failed");
                // Keep the previous data; record the error for the banner.
                snap.last_error = Some(e.to_string());
            }
        }
    }
}

/// Handle for the background refresh task. Stopping (or dropping) the
/// handle cancels the loop.
pub struct WatcherHandle {
    cancel: watch::Sender<bool>,
    task: Option<tokio::task::JoinHandle<()>>,
}

impl WatcherHandle {
    /// Cancel the refresh loop and wait for the task to finish.
    pub async fn stop(mut self) {
        let _ = self.cancel.send(true);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for WatcherHandle {
    fn drop(&mut self) {
        let _ = self.cancel.send(true);
    }
}
