#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/dossier/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod pipeline;

// Re-export main types from sub-crates
pub use dossier_data as data;
pub use dossier_output as output;

pub use config::{DEFAULT_OUTPUT_PATH, DEFAULT_SYMBOL, ReportConfig};
pub use pipeline::{
    FETCH_STEPS, PipelineError, fetch_report, generate_report, load_credential, run,
};

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
