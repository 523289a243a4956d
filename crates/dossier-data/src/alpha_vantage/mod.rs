//! Alpha Vantage data providers.

pub mod client;
pub mod news;
pub mod quotes;
pub mod statements;

pub use client::{
    AlphaVantageClient, BASE_URL, Endpoint, HttpTransport, RawResponse, Transport,
};
pub use news::{NEWS_LIMIT, NewsItem};
pub use quotes::{DailyBar, QuoteRecord};
pub use statements::{BalanceSheetReport, CashFlowReport};
