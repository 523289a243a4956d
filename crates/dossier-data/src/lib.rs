#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/dossier/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod alpha_vantage;
pub mod credential;
pub mod error;
pub mod symbol;

pub use alpha_vantage::{
    AlphaVantageClient, BalanceSheetReport, CashFlowReport, Endpoint, HttpTransport, NewsItem,
    QuoteRecord, RawResponse, Transport,
};
pub use credential::Credential;
pub use error::{DataError, FetchFailure, Result, Section};
pub use symbol::Symbol;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
