//! Alpha Vantage API client.

use crate::credential::Credential;
use crate::error::{DataError, FetchFailure, Result, Section};
use crate::symbol::Symbol;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::future::Future;
use tracing::{debug, warn};

/// Alpha Vantage query endpoint
pub const BASE_URL: &str = "https://www.alphavantage.co/query";

/// User agent sent with every request
const USER_AGENT: &str = concat!("dossier/", env!("CARGO_PKG_VERSION"));

/// Provider operations used by the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Daily OHLCV series
    TimeSeriesDaily,
    /// Annual and quarterly cash-flow statements
    CashFlow,
    /// Annual and quarterly balance sheets
    BalanceSheet,
    /// Sentiment-tagged news feed
    NewsSentiment,
}

impl Endpoint {
    /// Every endpoint, in report order.
    pub const ALL: [Self; 4] = [
        Self::TimeSeriesDaily,
        Self::CashFlow,
        Self::BalanceSheet,
        Self::NewsSentiment,
    ];

    /// Value of the `function` query parameter.
    pub const fn function(self) -> &'static str {
        match self {
            Self::TimeSeriesDaily => "TIME_SERIES_DAILY",
            Self::CashFlow => "CASH_FLOW",
            Self::BalanceSheet => "BALANCE_SHEET",
            Self::NewsSentiment => "NEWS_SENTIMENT",
        }
    }

    /// Name of the query parameter carrying the ticker.
    pub const fn symbol_param(self) -> &'static str {
        match self {
            Self::NewsSentiment => "tickers",
            _ => "symbol",
        }
    }

    /// Top-level response key holding the payload.
    pub const fn payload_key(self) -> &'static str {
        match self {
            Self::TimeSeriesDaily => "Time Series (Daily)",
            Self::CashFlow | Self::BalanceSheet => "annualReports",
            Self::NewsSentiment => "feed",
        }
    }

    /// Message reported when [`Endpoint::payload_key`] is absent.
    pub const fn missing_message(self) -> &'static str {
        match self {
            Self::TimeSeriesDaily => "Time series data not found in the response",
            Self::CashFlow => "Failed to retrieve cash flow information",
            Self::BalanceSheet => "Failed to retrieve balance sheet information",
            Self::NewsSentiment => "Failed to retrieve news information",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function())
    }
}

/// Status and body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body, empty when the status was not a success
    pub body: String,
}

impl RawResponse {
    /// Create a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Issues GET requests on behalf of [`AlphaVantageClient`].
pub trait Transport {
    /// GET `url` with `query` appended.
    ///
    /// # Errors
    ///
    /// Transport-level failures only; a non-success status is returned as a
    /// [`RawResponse`].
    fn get(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> impl Future<Output = Result<RawResponse>> + Send;
}

/// [`Transport`] backed by `reqwest`. Uses the client's default timeouts.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DataError::Http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<RawResponse> {
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Ok(RawResponse::new(status.as_u16(), String::new()));
        }

        let body = response.text().await?;
        Ok(RawResponse::new(status.as_u16(), body))
    }
}

/// Messages Alpha Vantage sends in place of data (rate limits, bad keys, unknown symbols).
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProviderNotice {
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
}

impl ProviderNotice {
    fn into_message(self) -> Option<String> {
        self.error_message.or(self.information).or(self.note)
    }
}

/// Build a [`FetchFailure::MissingKey`], logging whatever the provider said instead.
pub(crate) fn missing_key(endpoint: Endpoint, notice: ProviderNotice) -> FetchFailure {
    let notice = notice.into_message();
    match &notice {
        Some(message) => warn!(%endpoint, key = endpoint.payload_key(), %message, "payload missing, provider notice"),
        None => warn!(%endpoint, key = endpoint.payload_key(), "payload missing"),
    }
    FetchFailure::MissingKey { endpoint, notice }
}

/// Alpha Vantage client. Each fetch issues exactly one request.
pub struct AlphaVantageClient<T = HttpTransport> {
    transport: T,
    credential: Credential,
    base_url: String,
}

impl AlphaVantageClient<HttpTransport> {
    /// Create a client over HTTP.
    ///
    /// # Example
    /// ```no_run
    /// use dossier_data::{AlphaVantageClient, Credential, Symbol};
    ///
    /// # async fn example() -> dossier_data::Result<()> {
    /// let client = AlphaVantageClient::new(Credential::load())?;
    /// let quote = client.fetch_quote(&Symbol::from("AAPL")).await?;
    /// if let Ok(quote) = quote {
    ///     println!("{}: close {:?}", quote.date, quote.close);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(credential: Credential) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new()?, credential))
    }
}

impl<T: Transport> AlphaVantageClient<T> {
    /// Create a client over an arbitrary transport.
    pub fn with_transport(transport: T, credential: Credential) -> Self {
        Self {
            transport,
            credential,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the client at a different query endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The underlying transport.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Query endpoint in use.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request `endpoint` for `symbol` and deserialize the body into `E`.
    ///
    /// A non-success status short-circuits to [`FetchFailure::Status`] without
    /// looking at the body. A body that is not valid JSON is fatal.
    pub(crate) async fn fetch_envelope<E>(
        &self,
        endpoint: Endpoint,
        symbol: &Symbol,
    ) -> Result<Section<E>>
    where
        E: DeserializeOwned,
    {
        let query = [
            ("function", endpoint.function()),
            (endpoint.symbol_param(), symbol.as_str()),
            ("apikey", self.credential.expose()),
        ];

        debug!(%endpoint, %symbol, "requesting");
        let response = self.transport.get(&self.base_url, &query).await?;

        if !response.is_success() {
            warn!(%endpoint, status = response.status, "non-success status");
            return Ok(Err(FetchFailure::Status {
                endpoint,
                status: response.status,
            }));
        }

        let envelope = serde_json::from_str(&response.body)
            .map_err(|source| DataError::Parse { endpoint, source })?;

        Ok(Ok(envelope))
    }
}

impl<T> fmt::Debug for AlphaVantageClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlphaVantageClient")
            .field("base_url", &self.base_url)
            .field("credential", &self.credential)
            .finish_non_exhaustive()
    }
}
