//! Annual financial statements from the `CASH_FLOW` and `BALANCE_SHEET` endpoints.

use super::client::{AlphaVantageClient, Endpoint, ProviderNotice, Transport, missing_key};
use crate::error::{Result, Section};
use crate::symbol::Symbol;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::info;

/// One fiscal year of the cash-flow statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowReport {
    /// Last day of the fiscal year
    pub fiscal_date_ending: Option<String>,
    /// Cash flow from operating activities
    pub operating_cashflow: Option<String>,
    /// Capital expenditures
    pub capital_expenditures: Option<String>,
    /// Cash flow from financing activities
    pub cashflow_from_financing: Option<String>,
}

/// One fiscal year of the balance sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheetReport {
    /// Last day of the fiscal year
    pub fiscal_date_ending: Option<String>,
    /// Total assets
    pub total_assets: Option<String>,
    /// Total liabilities
    pub total_liabilities: Option<String>,
    /// Total shareholder equity
    pub total_shareholder_equity: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnnualReportsEnvelope<R> {
    #[serde(rename = "annualReports")]
    annual_reports: Option<Vec<R>>,
    #[serde(flatten)]
    notice: ProviderNotice,
}

impl<T: Transport> AlphaVantageClient<T> {
    /// Fetch annual cash-flow statements, most recent first as the provider sends them.
    ///
    /// # Errors
    /// Transport failures and non-JSON bodies.
    pub async fn fetch_cash_flow(&self, symbol: &Symbol) -> Result<Section<Vec<CashFlowReport>>> {
        self.fetch_annual_reports(Endpoint::CashFlow, symbol).await
    }

    /// Fetch annual balance sheets, most recent first as the provider sends them.
    ///
    /// # Errors
    /// Transport failures and non-JSON bodies.
    pub async fn fetch_balance_sheet(
        &self,
        symbol: &Symbol,
    ) -> Result<Section<Vec<BalanceSheetReport>>> {
        self.fetch_annual_reports(Endpoint::BalanceSheet, symbol)
            .await
    }

    async fn fetch_annual_reports<R>(
        &self,
        endpoint: Endpoint,
        symbol: &Symbol,
    ) -> Result<Section<Vec<R>>>
    where
        R: DeserializeOwned,
    {
        let section = self
            .fetch_envelope::<AnnualReportsEnvelope<R>>(endpoint, symbol)
            .await?
            .and_then(|envelope| {
                let AnnualReportsEnvelope {
                    annual_reports,
                    notice,
                } = envelope;
                annual_reports.ok_or_else(|| missing_key(endpoint, notice))
            });

        if let Ok(reports) = &section {
            info!(%symbol, %endpoint, count = reports.len(), "fetched annual reports");
        }

        Ok(section)
    }
}
