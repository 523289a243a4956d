//! News from the `NEWS_SENTIMENT` endpoint.

use super::client::{AlphaVantageClient, Endpoint, ProviderNotice, Transport, missing_key};
use crate::error::{Result, Section};
use crate::symbol::Symbol;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Number of articles kept from the feed.
pub const NEWS_LIMIT: usize = 5;

/// A news article from the sentiment feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Headline
    pub title: Option<String>,
    /// Provider summary
    pub summary: Option<String>,
    /// Link to the article
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NewsFeedEnvelope {
    feed: Option<Vec<NewsItem>>,
    #[serde(flatten)]
    notice: ProviderNotice,
}

impl<T: Transport> AlphaVantageClient<T> {
    /// Fetch the first [`NEWS_LIMIT`] articles mentioning `symbol`, in feed order.
    ///
    /// # Errors
    /// Transport failures and non-JSON bodies.
    pub async fn fetch_news(&self, symbol: &Symbol) -> Result<Section<Vec<NewsItem>>> {
        let endpoint = Endpoint::NewsSentiment;
        let section = self
            .fetch_envelope::<NewsFeedEnvelope>(endpoint, symbol)
            .await?
            .and_then(|envelope| {
                let NewsFeedEnvelope { feed, notice } = envelope;
                feed.map(|mut items| {
                    items.truncate(NEWS_LIMIT);
                    items
                })
                .ok_or_else(|| missing_key(endpoint, notice))
            });

        if let Ok(items) = &section {
            info!(%symbol, count = items.len(), "fetched news");
        }

        Ok(section)
    }
}
