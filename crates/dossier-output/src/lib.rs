#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/dossier/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod report;
pub mod writer;

pub use report::{
    AnnualStatement, Report, ReportBuilder, ReportError, STATEMENT_YEARS, render_news_section,
    render_quote_section, render_statement_section,
};
pub use writer::{WriteError, write_text};
