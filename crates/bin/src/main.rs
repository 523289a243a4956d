//! dossier CLI binary.
//!
//! Fetches the AAPL quote, statements and news from Alpha Vantage and writes
//! `apple_stock_report.txt` in the working directory.

use clap::{ArgAction, Parser};
use dossier::{FETCH_STEPS, ReportConfig, generate_report};
use indicatif::{ProgressBar, ProgressStyle};
use std::process;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dossier")]
#[command(
    about = "Write a plain-text AAPL report from Alpha Vantage data",
    long_about = "Fetches the latest daily quote, the last two annual cash-flow statements and \
                  balance sheets, and the top five news items for AAPL, then writes them to \
                  apple_stock_report.txt. The API key is read from ALPHA_VANTAGE_API_KEY, or \
                  from a .env file in the working directory."
)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    const fn default_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ReportConfig::default();
    debug!(?config, "starting report run");

    let pb = ProgressBar::new(FETCH_STEPS);
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{pos}/{len}] {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    match generate_report(&config, Some(&pb)).await {
        Ok(_) => pb.finish_and_clear(),
        Err(e) => {
            pb.abandon_with_message("Failed!");
            return Err(e.into());
        }
    }

    println!("Report saved as '{}'.", config.output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(Cli::parse_from(["dossier"]).default_directive(), "warn");
        assert_eq!(Cli::parse_from(["dossier", "-v"]).default_directive(), "info");
        assert_eq!(Cli::parse_from(["dossier", "-vv"]).default_directive(), "debug");
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["dossier", "MSFT"]).is_err());
    }
}
