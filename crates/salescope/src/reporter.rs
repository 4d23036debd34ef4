//! Pipeline progress reporting.
//!
//! The orchestrator does not print or log directly for user-facing
//! progress; it emits typed events to an injected [`Reporter`]. Embedders
//! pick the sink: the CLI installs a console reporter, tests capture events
//! in memory, and [`LogReporter`] forwards to the `log` facade.

use std::fmt;
use std::sync::{Arc, Mutex};

/// Pipeline stage for one input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Loading,
    Validating,
    Computing,
    Exporting,
    Delivering,
    Done,
}

impl Stage {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Loading => "loading",
            Stage::Validating => "validating",
            Stage::Computing => "computing",
            Stage::Exporting => "exporting",
            Stage::Delivering => "delivering",
            Stage::Done => "done",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A progress event emitted by the report pipeline.
#[derive(Debug, Clone)]
pub enum ReportEvent {
    /// A stage began for a file.
    StageStarted { file: String, stage: Stage },
    /// The file's table was loaded.
    Loaded {
        file: String,
        rows: usize,
        columns: usize,
    },
    /// A stage failed; the file's pipeline is aborted.
    StageFailed {
        file: String,
        stage: Stage,
        error: String,
    },
    /// The file's report was generated.
    Completed {
        file: String,
        month: String,
        start_date: String,
        end_date: String,
    },
}

/// Sink for pipeline progress events.
pub trait Reporter: Send + Sync {
    /// Receive one event.
    fn report(&self, event: ReportEvent);
}

impl<T: Reporter + ?Sized> Reporter for Arc<T> {
    fn report(&self, event: ReportEvent) {
        (**self).report(event);
    }
}

/// Forwards events to the `log` facade.
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, event: ReportEvent) {
        match event {
            ReportEvent::StageStarted { file, stage } => {
                log::debug!("{file}: {stage}");
            }
            ReportEvent::Loaded {
                file,
                rows,
                columns,
            } => {
                log::info!("{file}: loaded {rows} rows, {columns} columns");
            }
            ReportEvent::StageFailed { file, stage, error } => {
                log::warn!("{file}: failed during {stage}: {error}");
            }
            ReportEvent::Completed {
                file,
                month,
                start_date,
                end_date,
            } => {
                log::info!("{file}: report for {start_date} to {end_date} ({month})");
            }
        }
    }
}

/// Discards all events. Library default.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _event: ReportEvent) {}
}

/// Captures events for inspection, primarily in tests.
#[derive(Default)]
pub struct MemoryReporter {
    events: Mutex<Vec<ReportEvent>>,
}

impl MemoryReporter {
    /// Create an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far.
    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.lock().expect("reporter lock poisoned").clone()
    }

    /// The stages started, in order.
    pub fn stages(&self) -> Vec<Stage> {
        self.events()
            .iter()
            .filter_map(|e| match e {
                ReportEvent::StageStarted { stage, .. } => Some(*stage),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, event: ReportEvent) {
        self.events.lock().expect("reporter lock poisoned").push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_reporter_captures_in_order() {
        let reporter = MemoryReporter::new();
        reporter.report(ReportEvent::StageStarted {
            file: "a.csv".into(),
            stage: Stage::Loading,
        });
        reporter.report(ReportEvent::StageStarted {
            file: "a.csv".into(),
            stage: Stage::Validating,
        });

        assert_eq!(reporter.stages(), vec![Stage::Loading, Stage::Validating]);
    }

    #[test]
    fn test_log_reporter_accepts_all_events() {
        let reporter = LogReporter;
        reporter.report(ReportEvent::StageStarted {
            file: "a.csv".into(),
            stage: Stage::Loading,
        });
        reporter.report(ReportEvent::Loaded {
            file: "a.csv".into(),
            rows: 2,
            columns: 4,
        });
        reporter.report(ReportEvent::StageFailed {
            file: "a.csv".into(),
            stage: Stage::Validating,
            error: "missing columns".into(),
        });
        reporter.report(ReportEvent::Completed {
            file: "a.csv".into(),
            month: "january".into(),
            start_date: "2024-01-05".into(),
            end_date: "2024-01-10".into(),
        });
    }

    #[test]
    fn test_stage_labels() {
        assert_eq!(Stage::Loading.label(), "loading");
        assert_eq!(Stage::Delivering.to_string(), "delivering");
    }
}
