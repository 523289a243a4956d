//! End-to-end report pipeline.
//!
//! Loads the credential, fetches the four sections one after another, renders
//! them and writes the file. Section-level failures end up inside the report;
//! transport errors, unparseable bodies and write errors abort the run before
//! or instead of the write.

use crate::config::ReportConfig;
use dossier_data::{AlphaVantageClient, Credential, DataError, Symbol, Transport, credential};
use dossier_output::{Report, ReportBuilder, ReportError, WriteError};
use indicatif::ProgressBar;
use std::env;
use tracing::{info, warn};

/// Number of provider requests per report.
pub const FETCH_STEPS: u64 = 4;

/// Error type for pipeline operations.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Fetch error from the provider.
    #[error("Data fetch error: {0}")]
    Data(#[from] DataError),
    /// Report assembly error.
    #[error("Report error: {0}")]
    Report(#[from] ReportError),
    /// Report file could not be written.
    #[error("Write error: {0}")]
    Write(#[from] WriteError),
}

/// Load `.env`, then read the configured key variable. Never fails.
pub fn load_credential(config: &ReportConfig) -> Credential {
    credential::load_dotenv();
    Credential::resolve(Credential::from_lookup(&config.api_key_var, |name| {
        env::var(name).ok()
    }))
}

fn step(progress: Option<&ProgressBar>, message: &'static str) {
    if let Some(pb) = progress {
        pb.set_message(message);
    }
}

fn advance(progress: Option<&ProgressBar>) {
    if let Some(pb) = progress {
        pb.inc(1);
    }
}

/// Fetch quote, cash flow, balance sheet and news for `symbol`, in that order.
///
/// # Errors
///
/// Fails on transport errors or unparseable bodies. Missing payloads and
/// non-success statuses are kept as failed sections.
pub async fn fetch_report<T: Transport>(
    client: &AlphaVantageClient<T>,
    symbol: &Symbol,
    progress: Option<&ProgressBar>,
) -> Result<Report, PipelineError> {
    step(progress, "Fetching daily quote...");
    let quote = client.fetch_quote(symbol).await?;
    advance(progress);

    step(progress, "Fetching cash flow...");
    let cash_flow = client.fetch_cash_flow(symbol).await?;
    advance(progress);

    step(progress, "Fetching balance sheet...");
    let balance_sheet = client.fetch_balance_sheet(symbol).await?;
    advance(progress);

    step(progress, "Fetching news...");
    let news = client.fetch_news(symbol).await?;
    advance(progress);

    let report = ReportBuilder::new()
        .symbol(symbol.clone())
        .quote(quote)
        .cash_flow(cash_flow)
        .balance_sheet(balance_sheet)
        .news(news)
        .build()?;

    for failure in report.failures() {
        warn!(endpoint = %failure.endpoint(), %failure, "section unavailable");
    }

    Ok(report)
}

/// Fetch every section through `client` and write the report to the configured path.
///
/// # Errors
///
/// See [`fetch_report`]; also fails if the file cannot be written.
pub async fn run<T: Transport>(
    client: &AlphaVantageClient<T>,
    config: &ReportConfig,
    progress: Option<&ProgressBar>,
) -> Result<Report, PipelineError> {
    let report = fetch_report(client, &config.symbol, progress).await?;

    step(progress, "Writing report...");
    report.write_to(&config.output_path)?;

    info!(
        symbol = %config.symbol,
        path = %config.output_path.display(),
        failed_sections = report.failures().len(),
        "report complete"
    );

    Ok(report)
}

/// Load the credential, build an HTTP client and run the pipeline.
///
/// # Errors
///
/// See [`run`]; also fails if the HTTP client cannot be built.
pub async fn generate_report(
    config: &ReportConfig,
    progress: Option<&ProgressBar>,
) -> Result<Report, PipelineError> {
    let credential = load_credential(config);
    let client = AlphaVantageClient::new(credential)?.with_base_url(config.base_url.clone());
    run(&client, config, progress).await
}
