//! Latest daily quote from the `TIME_SERIES_DAILY` endpoint.

use super::client::{AlphaVantageClient, Endpoint, ProviderNotice, Transport, missing_key};
use crate::error::{Result, Section};
use crate::symbol::Symbol;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Date format of the series keys.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// One day of the provider's daily series. Values are kept as sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBar {
    /// Opening price
    #[serde(rename = "1. open")]
    pub open: Option<String>,
    /// Session high
    #[serde(rename = "2. high")]
    pub high: Option<String>,
    /// Session low
    #[serde(rename = "3. low")]
    pub low: Option<String>,
    /// Closing price
    #[serde(rename = "4. close")]
    pub close: Option<String>,
    /// Shares traded
    #[serde(rename = "5. volume")]
    pub volume: Option<String>,
}

/// The most recent trading day for a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Trading date
    pub date: NaiveDate,
    /// Opening price
    pub open: Option<String>,
    /// Session high
    pub high: Option<String>,
    /// Session low
    pub low: Option<String>,
    /// Closing price
    pub close: Option<String>,
    /// Shares traded
    pub volume: Option<String>,
}

impl QuoteRecord {
    /// Build a record from a dated bar.
    pub fn from_bar(date: NaiveDate, bar: DailyBar) -> Self {
        Self {
            date,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
        }
    }

    /// Pick the bar with the greatest date. Keys that are not `YYYY-MM-DD`
    /// dates are skipped; `None` if no key parses.
    pub fn latest<I>(series: I) -> Option<Self>
    where
        I: IntoIterator<Item = (String, DailyBar)>,
    {
        series
            .into_iter()
            .filter_map(|(key, bar)| match NaiveDate::parse_from_str(&key, DATE_FORMAT) {
                Ok(date) => Some((date, bar)),
                Err(_) => {
                    debug!(%key, "skipping series key that is not a date");
                    None
                }
            })
            .max_by_key(|(date, _)| *date)
            .map(|(date, bar)| Self::from_bar(date, bar))
    }
}

#[derive(Debug, Deserialize)]
struct DailySeriesEnvelope {
    #[serde(rename = "Time Series (Daily)")]
    series: Option<BTreeMap<String, DailyBar>>,
    #[serde(flatten)]
    notice: ProviderNotice,
}

impl<T: Transport> AlphaVantageClient<T> {
    /// Fetch the latest daily quote for `symbol`.
    ///
    /// # Returns
    /// The quote, or [`FetchFailure`](crate::FetchFailure) when the status is
    /// not a success or the response has no daily series.
    ///
    /// # Errors
    /// Transport failures and non-JSON bodies.
    pub async fn fetch_quote(&self, symbol: &Symbol) -> Result<Section<QuoteRecord>> {
        let endpoint = Endpoint::TimeSeriesDaily;
        let section = self
            .fetch_envelope::<DailySeriesEnvelope>(endpoint, symbol)
            .await?
            .and_then(|envelope| {
                let DailySeriesEnvelope { series, notice } = envelope;
                series
                    .and_then(QuoteRecord::latest)
                    .ok_or_else(|| missing_key(endpoint, notice))
            });

        if let Ok(quote) = &section {
            info!(%symbol, date = %quote.date, "fetched daily quote");
        }

        Ok(section)
    }
}

#[cfg(test)]
mod tests {
    use super::super::client::testing::{CannedTransport, client};
    use super::*;
    use crate::error::FetchFailure;

    const DESCENDING: &str = r#"{
        "Meta Data": {"2. Symbol": "AAPL"},
        "Time Series (Daily)": {
            "2024-03-08": {"1. open": "169.0000", "2. high": "173.7000", "3. low": "168.9400", "4. close": "170.7300", "5. volume": "76267041"},
            "2024-03-07": {"1. open": "169.1500", "2. high": "170.7300", "3. low": "168.4900", "4. close": "169.0000", "5. volume": "71765061"}
        }
    }"#;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_quote_latest_day() {
        let client = client(CannedTransport::new().respond(Endpoint::TimeSeriesDaily, 200, DESCENDING));

        let quote = client
            .fetch_quote(&Symbol::from("AAPL"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(quote.date, date(2024, 3, 8));
        assert_eq!(quote.open.as_deref(), Some("169.0000"));
        assert_eq!(quote.high.as_deref(), Some("173.7000"));
        assert_eq!(quote.low.as_deref(), Some("168.9400"));
        assert_eq!(quote.close.as_deref(), Some("170.7300"));
        assert_eq!(quote.volume.as_deref(), Some("76267041"));
    }

    #[tokio::test]
    async fn test_fetch_quote_missing_series() {
        let body = r#"{"Information": "The **demo** API key is for demo purposes only."}"#;
        let client = client(CannedTransport::new().respond(Endpoint::TimeSeriesDaily, 200, body));

        let failure = client
            .fetch_quote(&Symbol::from("AAPL"))
            .await
            .unwrap()
            .unwrap_err();

        assert_eq!(
            failure.to_string(),
            "Time series data not found in the response"
        );
        assert!(matches!(
            failure,
            FetchFailure::MissingKey { notice: Some(_), .. }
        ));
    }

    #[tokio::test]
    async fn test_fetch_quote_bad_status() {
        let client =
            client(CannedTransport::new().respond(Endpoint::TimeSeriesDaily, 502, DESCENDING));

        let failure = client
            .fetch_quote(&Symbol::from("AAPL"))
            .await
            .unwrap()
            .unwrap_err();

        assert_eq!(
            failure.to_string(),
            "Failed to retrieve data from Alpha Vantage"
        );
    }

    #[test]
    fn test_latest_ignores_input_order() {
        let bar = |close: &str| DailyBar {
            close: Some(close.to_string()),
            ..DailyBar::default()
        };
        let series = vec![
            ("2024-03-06".to_string(), bar("a")),
            ("2024-03-08".to_string(), bar("c")),
            ("2024-03-07".to_string(), bar("b")),
        ];

        let quote = QuoteRecord::latest(series).unwrap();
        assert_eq!(quote.date, date(2024, 3, 8));
        assert_eq!(quote.close.as_deref(), Some("c"));
    }

    #[test]
    fn test_latest_skips_unparseable_keys() {
        let series = vec![
            ("latest".to_string(), DailyBar::default()),
            ("2023-12-29".to_string(), DailyBar::default()),
        ];
        assert_eq!(QuoteRecord::latest(series).unwrap().date, date(2023, 12, 29));

        let series = vec![("latest".to_string(), DailyBar::default())];
        assert!(QuoteRecord::latest(series).is_none());
    }

    #[test]
    fn test_missing_bar_fields_are_none() {
        let bar: DailyBar = serde_json::from_str(r#"{"4. close": "1.00"}"#).unwrap();
        let quote = QuoteRecord::from_bar(date(2024, 1, 2), bar);
        assert!(quote.open.is_none());
        assert!(quote.volume.is_none());
        assert_eq!(quote.close.as_deref(), Some("1.00"));
    }
}
