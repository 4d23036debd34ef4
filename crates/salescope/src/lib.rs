//! Salescope: monthly sales report generator for CSV transaction data.
//!
//! Salescope loads per-month sales transaction files, validates their shape,
//! derives summary metrics, and emits report artifacts (metrics CSV, trend
//! charts, HTML/PDF document, optional email delivery) under a directory
//! keyed by the month the data covers.
//!
//! # Core Principles
//!
//! - **Validate before trusting**: a table is accepted or rejected as a
//!   whole, with the failure reason preserved (missing columns, a value
//!   that will not coerce, no rows at all).
//! - **Deterministic metrics**: identical input always yields identical
//!   insights, including the top-product tie-break.
//! - **Collaborators behind traits**: chart, document, and mail output are
//!   pluggable, so the pipeline is testable without a chart backend, a PDF
//!   binary, or an SMTP server.
//!
//! # Example
//!
//! ```no_run
//! use salescope::ReportEngine;
//!
//! let engine = ReportEngine::new();
//! let insights = engine.generate("data/sales_january.csv").unwrap();
//!
//! println!("{} to {}", insights.start_date, insights.end_date);
//! println!("Total: {}", insights.total_sales);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod metrics;
pub mod report;
pub mod reporter;
pub mod table;
pub mod validation;

pub use config::{ReportConfig, SmtpConfig};
pub use error::{Result, SalescopeError};
pub use input::{Loader, LoaderConfig, RawTable, SourceMetadata};
pub use metrics::Insights;
pub use report::{
    BatchSummary, ChartRenderer, DocumentRenderer, METRICS_FILE, MailTransport, RenderedReport,
    ReportEngine, read_metrics, write_metrics,
};
pub use reporter::{LogReporter, MemoryReporter, NullReporter, ReportEvent, Reporter, Stage};
pub use table::{SalesTable, Transaction};
pub use validation::TableValidator;
