//! Ticker symbols.

use derive_more::{Display, From, Into};

/// Ticker symbol of a listed equity, passed to the provider as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Into)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// The symbol text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(symbol: &str) -> Self {
        Self::new(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_display() {
        let symbol = Symbol::from("AAPL");
        assert_eq!(symbol.to_string(), "AAPL");
        assert_eq!(symbol.as_str(), "AAPL");
        assert_eq!(String::from(symbol), "AAPL");
    }
}
