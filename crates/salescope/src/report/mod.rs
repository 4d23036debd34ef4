//! Report generation: orchestration, metrics export, and collaborators.

mod charts;
mod document;
mod engine;
mod export;
mod mail;
pub mod mock;

pub use charts::{ChartRenderer, DISTRIBUTION_FILE, PlottersCharts, TREND_FILE};
pub use document::{DocumentRenderer, HTML_FILE, HtmlPdfRenderer, PDF_FILE, RenderedReport};
pub use engine::{BatchSummary, METRICS_FILE, ReportEngine};
pub use export::{read_metrics, write_metrics};
pub use mail::{MailTransport, SmtpMailer};
