//! Fetch each report section for a symbol and print a one-line summary.
//!
//! Run with `ALPHA_VANTAGE_API_KEY` set (or a `.env` file):
//! `cargo run -p dossier-data --example fetch_sections`

use dossier_data::{AlphaVantageClient, Credential, Symbol};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = AlphaVantageClient::new(Credential::load())?;
    let symbol = Symbol::from("AAPL");

    println!("=== Alpha Vantage sections for {} ===\n", symbol);

    match client.fetch_quote(&symbol).await? {
        Ok(quote) => println!(
            "Quote:         {} close {}",
            quote.date,
            quote.close.as_deref().unwrap_or("None")
        ),
        Err(failure) => println!("Quote:         {}", failure),
    }

    match client.fetch_cash_flow(&symbol).await? {
        Ok(reports) => println!("Cash flow:     {} fiscal years", reports.len()),
        Err(failure) => println!("Cash flow:     {}", failure),
    }

    match client.fetch_balance_sheet(&symbol).await? {
        Ok(reports) => println!("Balance sheet: {} fiscal years", reports.len()),
        Err(failure) => println!("Balance sheet: {}", failure),
    }

    match client.fetch_news(&symbol).await? {
        Ok(items) => {
            println!("News:          {} items", items.len());
            for item in &items {
                println!("  - {}", item.title.as_deref().unwrap_or("None"));
            }
        }
        Err(failure) => println!("News:          {}", failure),
    }

    Ok(())
}
