//! Run configuration.
//!
//! Everything here is fixed at compile time; the binary always runs with
//! [`ReportConfig::default`]. Tests swap the endpoint and output path.

use dossier_data::Symbol;
use dossier_data::alpha_vantage::BASE_URL;
use dossier_data::credential::API_KEY_VAR;
use std::path::PathBuf;

/// Ticker the report is generated for.
pub const DEFAULT_SYMBOL: &str = "AAPL";

/// Report file, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "apple_stock_report.txt";

/// Configuration for one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Ticker to report on.
    pub symbol: Symbol,
    /// Destination file.
    pub output_path: PathBuf,
    /// Provider query endpoint.
    pub base_url: String,
    /// Environment variable holding the API key.
    pub api_key_var: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            symbol: Symbol::from(DEFAULT_SYMBOL),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            base_url: BASE_URL.to_string(),
            api_key_var: API_KEY_VAR.to_string(),
        }
    }
}

impl ReportConfig {
    /// Write the report somewhere else.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Query a different endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.symbol.as_str(), "AAPL");
        assert_eq!(config.output_path, PathBuf::from("apple_stock_report.txt"));
        assert_eq!(config.base_url, "https://www.alphavantage.co/query");
        assert_eq!(config.api_key_var, "ALPHA_VANTAGE_API_KEY");
    }
}
