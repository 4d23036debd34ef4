//! Report orchestrator: drives load, validate, compute, export, deliver.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ReportConfig;
use crate::error::{Result, SalescopeError};
use crate::input::Loader;
use crate::metrics::{Insights, month_label};
use crate::reporter::{NullReporter, ReportEvent, Reporter, Stage};
use crate::table::SalesTable;
use crate::validation::TableValidator;

use super::charts::{ChartRenderer, PlottersCharts};
use super::document::{DocumentRenderer, HtmlPdfRenderer};
use super::export::write_metrics;
use super::mail::{MailTransport, SmtpMailer};

/// File name of the exported metrics snapshot.
pub const METRICS_FILE: &str = "metrics.csv";

/// Outcome counts for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files whose report was generated.
    pub succeeded: usize,
    /// Files that were skipped after a failure.
    pub failed: usize,
}

/// The report generation engine.
///
/// Collaborators (charts, document, mail) and the progress reporter are
/// injected; defaults are the production implementations and a silent
/// reporter.
pub struct ReportEngine {
    config: ReportConfig,
    loader: Loader,
    validator: TableValidator,
    charts: Box<dyn ChartRenderer>,
    document: Box<dyn DocumentRenderer>,
    mail: Box<dyn MailTransport>,
    reporter: Box<dyn Reporter>,
}

impl ReportEngine {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(ReportConfig::default())
    }

    /// Create an engine with custom configuration.
    pub fn with_config(config: ReportConfig) -> Self {
        let mail = SmtpMailer::new(config.smtp.host.clone(), config.smtp.port);

        Self {
            loader: Loader::new(),
            validator: TableValidator::new(),
            charts: Box::new(PlottersCharts::new()),
            document: Box::new(HtmlPdfRenderer::new()),
            mail: Box::new(mail),
            reporter: Box::new(NullReporter),
            config,
        }
    }

    /// Replace the chart renderer.
    pub fn with_charts(mut self, charts: impl ChartRenderer + 'static) -> Self {
        self.charts = Box::new(charts);
        self
    }

    /// Replace the document renderer.
    pub fn with_document(mut self, document: impl DocumentRenderer + 'static) -> Self {
        self.document = Box::new(document);
        self
    }

    /// Replace the mail transport.
    pub fn with_mail(mut self, mail: impl MailTransport + 'static) -> Self {
        self.mail = Box::new(mail);
        self
    }

    /// Replace the progress reporter.
    pub fn with_reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Generate the report for one input file and return its insights.
    ///
    /// The month label is derived from the first record's date, as the
    /// data is expected to cover a single month; a file spanning several
    /// months reports under the first record's month. Artifacts land in
    /// `<output_dir>/<month-label>/` and overwrite any prior run for that
    /// month. Chart/document/delivery failures abort the file but leave an
    /// already-written metrics file in place.
    pub fn generate(&self, path: impl AsRef<Path>) -> Result<Insights> {
        let path = path.as_ref();
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let (raw, source) = self.run_stage(&file, Stage::Loading, || self.loader.load(path))?;
        log::debug!(
            "{}: {} bytes, {}",
            source.file,
            source.size_bytes,
            source.hash
        );
        self.reporter.report(ReportEvent::Loaded {
            file: file.clone(),
            rows: source.row_count,
            columns: source.column_count,
        });

        self.run_stage(&file, Stage::Validating, || self.validator.validate(&raw))?;

        let (table, month, insights) = self.run_stage(&file, Stage::Computing, || {
            let table = SalesTable::from_raw(&raw)?;
            let first = table.first().ok_or_else(|| {
                SalescopeError::EmptyTable(format!("'{file}' has a header but no rows"))
            })?;
            let month = month_label(first.date);
            let insights = Insights::compute(&table)?;
            Ok((table, month, insights))
        })?;

        let report_dir = self.config.output_dir.join(&month);
        self.run_stage(&file, Stage::Exporting, || {
            fs::create_dir_all(&report_dir).map_err(|e| SalescopeError::Io {
                path: report_dir.clone(),
                source: e,
            })?;
            write_metrics(&insights, report_dir.join(METRICS_FILE))?;
            self.charts.render(&table, &report_dir)?;
            self.document.render(&insights, &month, &report_dir)?;
            Ok(())
        })?;

        if let Some(recipient) = self.config.recipient.as_deref() {
            self.run_stage(&file, Stage::Delivering, || {
                self.mail
                    .send(&month, &report_dir, recipient, self.config.sender_or_default())
            })?;
        }

        self.reporter.report(ReportEvent::StageStarted {
            file: file.clone(),
            stage: Stage::Done,
        });
        self.reporter.report(ReportEvent::Completed {
            file,
            month,
            start_date: insights.start_date.clone(),
            end_date: insights.end_date.clone(),
        });

        Ok(insights)
    }

    /// Generate reports for every tabular file in a directory.
    ///
    /// Files are processed in name order. A failing file is counted and
    /// skipped; the batch continues. Only a missing or unreadable input
    /// directory fails the batch itself.
    pub fn run_directory(&self, dir: impl AsRef<Path>) -> Result<BatchSummary> {
        let dir = dir.as_ref();

        let entries = fs::read_dir(dir).map_err(|e| SalescopeError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| has_tabular_extension(path))
            .collect();
        files.sort();

        let mut summary = BatchSummary::default();
        for file in &files {
            // Failures were already reported stage-by-stage; the batch
            // only tallies them
            match self.generate(file) {
                Ok(_) => summary.succeeded += 1,
                Err(_) => summary.failed += 1,
            }
        }

        Ok(summary)
    }

    fn run_stage<T>(&self, file: &str, stage: Stage, f: impl FnOnce() -> Result<T>) -> Result<T> {
        self.reporter.report(ReportEvent::StageStarted {
            file: file.to_string(),
            stage,
        });
        f().inspect_err(|e| {
            self.reporter.report(ReportEvent::StageFailed {
                file: file.to_string(),
                stage,
                error: e.to_string(),
            });
        })
    }
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn has_tabular_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv") || e.eq_ignore_ascii_case("tsv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_tabular_extension() {
        assert!(has_tabular_extension(Path::new("data/sales.csv")));
        assert!(has_tabular_extension(Path::new("data/sales.CSV")));
        assert!(has_tabular_extension(Path::new("data/sales.tsv")));
        assert!(!has_tabular_extension(Path::new("data/notes.txt")));
        assert!(!has_tabular_extension(Path::new("data/sales")));
    }

    #[test]
    fn test_run_directory_missing_dir_is_fatal() {
        let engine = ReportEngine::new();
        let err = engine.run_directory("no/such/dir").unwrap_err();
        assert!(matches!(err, SalescopeError::Io { .. }));
    }
}
