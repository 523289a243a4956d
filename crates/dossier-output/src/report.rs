//! Plain-text report rendering.
//!
//! The report is four sections in fixed order: quote, cash flow, balance
//! sheet, news. Each section starts with a header line and every block ends
//! with a blank line. A statement or news section whose fetch failed carries
//! the failure message as its body; a failed quote prints every field as
//! `None`. Missing fields print as `None`.

use dossier_data::alpha_vantage::NEWS_LIMIT;
use dossier_data::{
    BalanceSheetReport, CashFlowReport, FetchFailure, NewsItem, QuoteRecord, Section, Symbol,
};
use thiserror::Error;

/// Fiscal years printed per statement section.
pub const STATEMENT_YEARS: usize = 2;

/// Placeholder for a field the provider did not send.
const MISSING: &str = "None";

/// Errors that can occur during report generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// A section was never supplied to the builder.
    #[error("Report is missing the {0} section")]
    MissingSection(&'static str),
}

/// Fetched data for one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Symbol being reported on.
    pub symbol: Symbol,

    /// Latest daily quote.
    pub quote: Section<QuoteRecord>,

    /// Annual cash-flow statements.
    pub cash_flow: Section<Vec<CashFlowReport>>,

    /// Annual balance sheets.
    pub balance_sheet: Section<Vec<BalanceSheetReport>>,

    /// Recent news.
    pub news: Section<Vec<NewsItem>>,
}

impl Report {
    /// Render the four sections back to back.
    pub fn render(&self) -> String {
        let mut output = render_quote_section(&self.symbol, &self.quote);
        output.push_str(&render_statement_section(&self.cash_flow));
        output.push_str(&render_statement_section(&self.balance_sheet));
        output.push_str(&render_news_section(&self.news));
        output
    }

    /// Sections that failed, in report order.
    pub fn failures(&self) -> Vec<&FetchFailure> {
        [
            self.quote.as_ref().err(),
            self.cash_flow.as_ref().err(),
            self.balance_sheet.as_ref().err(),
            self.news.as_ref().err(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Builder for creating reports.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    symbol: Option<Symbol>,
    quote: Option<Section<QuoteRecord>>,
    cash_flow: Option<Section<Vec<CashFlowReport>>>,
    balance_sheet: Option<Section<Vec<BalanceSheetReport>>>,
    news: Option<Section<Vec<NewsItem>>>,
}

impl ReportBuilder {
    /// Create a new report builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the symbol.
    pub fn symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = Some(symbol);
        self
    }

    /// Set the quote section.
    pub fn quote(mut self, quote: Section<QuoteRecord>) -> Self {
        self.quote = Some(quote);
        self
    }

    /// Set the cash-flow section.
    pub fn cash_flow(mut self, cash_flow: Section<Vec<CashFlowReport>>) -> Self {
        self.cash_flow = Some(cash_flow);
        self
    }

    /// Set the balance-sheet section.
    pub fn balance_sheet(mut self, balance_sheet: Section<Vec<BalanceSheetReport>>) -> Self {
        self.balance_sheet = Some(balance_sheet);
        self
    }

    /// Set the news section.
    pub fn news(mut self, news: Section<Vec<NewsItem>>) -> Self {
        self.news = Some(news);
        self
    }

    /// Build the report. Every section must have been set.
    pub fn build(self) -> Result<Report, ReportError> {
        Ok(Report {
            symbol: self.symbol.ok_or(ReportError::MissingSection("symbol"))?,
            quote: self.quote.ok_or(ReportError::MissingSection("quote"))?,
            cash_flow: self
                .cash_flow
                .ok_or(ReportError::MissingSection("cash flow"))?,
            balance_sheet: self
                .balance_sheet
                .ok_or(ReportError::MissingSection("balance sheet"))?,
            news: self.news.ok_or(ReportError::MissingSection("news"))?,
        })
    }
}

/// An annual statement that renders as one block of labelled lines.
pub trait AnnualStatement {
    /// Section header line, without the trailing newline.
    const HEADER: &'static str;

    /// Labelled values of one fiscal year, fiscal year first.
    fn lines(&self) -> Vec<(&'static str, Option<&str>)>;
}

impl AnnualStatement for CashFlowReport {
    const HEADER: &'static str = "Cash Flow Information:";

    fn lines(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("Fiscal Year", self.fiscal_date_ending.as_deref()),
            ("Operating Cash Flow", self.operating_cashflow.as_deref()),
            ("Capital Expenditures", self.capital_expenditures.as_deref()),
            (
                "Cash Flow from Financing",
                self.cashflow_from_financing.as_deref(),
            ),
        ]
    }
}

impl AnnualStatement for BalanceSheetReport {
    const HEADER: &'static str = "Balance Sheet Information:";

    fn lines(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("Fiscal Year", self.fiscal_date_ending.as_deref()),
            ("Total Assets", self.total_assets.as_deref()),
            ("Total Liabilities", self.total_liabilities.as_deref()),
            (
                "Total Shareholder Equity",
                self.total_shareholder_equity.as_deref(),
            ),
        ]
    }
}

fn push_line(output: &mut String, label: &str, value: Option<&str>) {
    output.push_str(&format!("{}: {}\n", label, value.unwrap_or(MISSING)));
}

fn push_failure(output: &mut String, failure: &FetchFailure) {
    output.push_str(&failure.to_string());
    output.push_str("\n\n");
}

/// Render the quote section.
///
/// The six field lines are always printed; a failed fetch leaves them all
/// `None` and the failure itself is only logged by the caller.
pub fn render_quote_section(symbol: &Symbol, quote: &Section<QuoteRecord>) -> String {
    let mut output = format!("Stock Information for {}:\n", symbol);

    let quote = quote.as_ref().ok();
    let date = quote.map(|q| q.date.format("%Y-%m-%d").to_string());
    push_line(&mut output, "Date", date.as_deref());
    push_line(&mut output, "Open", quote.and_then(|q| q.open.as_deref()));
    push_line(&mut output, "High", quote.and_then(|q| q.high.as_deref()));
    push_line(&mut output, "Low", quote.and_then(|q| q.low.as_deref()));
    push_line(&mut output, "Close", quote.and_then(|q| q.close.as_deref()));
    push_line(&mut output, "Volume", quote.and_then(|q| q.volume.as_deref()));
    output.push('\n');

    output
}

/// Render a statement section: the first [`STATEMENT_YEARS`] reports, in input order.
pub fn render_statement_section<S: AnnualStatement>(reports: &Section<Vec<S>>) -> String {
    let mut output = format!("{}\n", S::HEADER);

    match reports {
        Ok(reports) => {
            for report in reports.iter().take(STATEMENT_YEARS) {
                for (label, value) in report.lines() {
                    push_line(&mut output, label, value);
                }
                output.push('\n');
            }
        }
        Err(failure) => push_failure(&mut output, failure),
    }

    output
}

/// Render the news section: at most [`NEWS_LIMIT`] items, numbered from 1.
pub fn render_news_section(news: &Section<Vec<NewsItem>>) -> String {
    let mut output = String::from("Recent News:\n");

    match news {
        Ok(items) => {
            for (i, item) in items.iter().take(NEWS_LIMIT).enumerate() {
                output.push_str(&format!("News {}:\n", i + 1));
                push_line(&mut output, "Title", item.title.as_deref());
                push_line(&mut output, "Summary", item.summary.as_deref());
                push_line(&mut output, "URL", item.url.as_deref());
                output.push('\n');
            }
        }
        Err(failure) => push_failure(&mut output, failure),
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dossier_data::Endpoint;

    fn quote() -> QuoteRecord {
        QuoteRecord {
            date: NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
            open: Some("169.0000".to_string()),
            high: Some("173.7000".to_string()),
            low: Some("168.9400".to_string()),
            close: Some("170.7300".to_string()),
            volume: None,
        }
    }

    #[test]
    fn test_quote_section() {
        let text = render_quote_section(&Symbol::from("AAPL"), &Ok(quote()));
        assert_eq!(
            text,
            "Stock Information for AAPL:\n\
             Date: 2024-03-08\n\
             Open: 169.0000\n\
             High: 173.7000\n\
             Low: 168.9400\n\
             Close: 170.7300\n\
             Volume: None\n\
             \n"
        );
    }

    #[test]
    fn test_quote_section_failure_prints_none_fields() {
        let failures = [
            FetchFailure::Status {
                endpoint: Endpoint::TimeSeriesDaily,
                status: 503,
            },
            FetchFailure::MissingKey {
                endpoint: Endpoint::TimeSeriesDaily,
                notice: None,
            },
        ];

        for failure in failures {
            let text = render_quote_section(&Symbol::from("AAPL"), &Err(failure));
            assert_eq!(
                text,
                "Stock Information for AAPL:\n\
                 Date: None\n\
                 Open: None\n\
                 High: None\n\
                 Low: None\n\
                 Close: None\n\
                 Volume: None\n\
                 \n"
            );
        }
    }

    #[test]
    fn test_empty_statement_section_is_header_only() {
        let reports: Section<Vec<BalanceSheetReport>> = Ok(Vec::new());
        assert_eq!(
            render_statement_section(&reports),
            "Balance Sheet Information:\n"
        );
    }

    #[test]
    fn test_failures_in_order() {
        let report = ReportBuilder::new()
            .symbol(Symbol::from("AAPL"))
            .quote(Ok(quote()))
            .cash_flow(Err(FetchFailure::MissingKey {
                endpoint: Endpoint::CashFlow,
                notice: None,
            }))
            .balance_sheet(Ok(Vec::new()))
            .news(Err(FetchFailure::Status {
                endpoint: Endpoint::NewsSentiment,
                status: 500,
            }))
            .build()
            .unwrap();

        let endpoints: Vec<_> = report.failures().iter().map(|f| f.endpoint()).collect();
        assert_eq!(endpoints, vec![Endpoint::CashFlow, Endpoint::NewsSentiment]);
    }

    #[test]
    fn test_builder_requires_every_section() {
        let result = ReportBuilder::new()
            .symbol(Symbol::from("MSFT"))
            .quote(Ok(quote()))
            .build();
        assert_eq!(result.unwrap_err(), ReportError::MissingSection("cash flow"));
    }
}
