//! Mock collaborators for testing the pipeline without a chart backend,
//! a PDF binary, or an SMTP server.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::error::{Result, SalescopeError};
use crate::metrics::Insights;
use crate::table::SalesTable;

use super::charts::ChartRenderer;
use super::document::{DocumentRenderer, RenderedReport, HTML_FILE, PDF_FILE};
use super::mail::MailTransport;

/// Shared record of collaborator invocations.
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one call.
    pub fn record(&self, call: impl Into<String>) {
        self.calls
            .lock()
            .expect("call log lock poisoned")
            .push(call.into());
    }

    /// Snapshot of recorded calls.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("call log lock poisoned").clone()
    }

    /// Number of recorded calls.
    pub fn len(&self) -> usize {
        self.calls.lock().expect("call log lock poisoned").len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Chart renderer that records calls instead of drawing.
pub struct MockCharts {
    log: CallLog,
    fail: bool,
}

impl MockCharts {
    /// Create a mock that succeeds.
    pub fn new() -> Self {
        Self {
            log: CallLog::new(),
            fail: false,
        }
    }

    /// Create a mock whose render always fails.
    pub fn failing() -> Self {
        Self {
            log: CallLog::new(),
            fail: true,
        }
    }

    /// Handle to the call log; clone before moving the mock into an engine.
    pub fn log(&self) -> CallLog {
        self.log.clone()
    }
}

impl ChartRenderer for MockCharts {
    fn render(&self, table: &SalesTable, out_dir: &Path) -> Result<()> {
        if self.fail {
            return Err(SalescopeError::Render("mock chart failure".to_string()));
        }
        self.log
            .record(format!("charts:{}:{}", out_dir.display(), table.len()));
        Ok(())
    }
}

impl Default for MockCharts {
    fn default() -> Self {
        Self::new()
    }
}

/// Document renderer that records calls and returns the expected paths
/// without writing anything.
pub struct MockDocument {
    log: CallLog,
    fail: bool,
}

impl MockDocument {
    /// Create a mock that succeeds.
    pub fn new() -> Self {
        Self {
            log: CallLog::new(),
            fail: false,
        }
    }

    /// Create a mock whose render always fails.
    pub fn failing() -> Self {
        Self {
            log: CallLog::new(),
            fail: true,
        }
    }

    /// Handle to the call log.
    pub fn log(&self) -> CallLog {
        self.log.clone()
    }
}

impl DocumentRenderer for MockDocument {
    fn render(&self, _insights: &Insights, month: &str, out_dir: &Path) -> Result<RenderedReport> {
        if self.fail {
            return Err(SalescopeError::Render("mock document failure".to_string()));
        }
        self.log.record(format!("document:{month}"));
        Ok(RenderedReport {
            html: out_dir.join(HTML_FILE),
            pdf: out_dir.join(PDF_FILE),
        })
    }
}

impl Default for MockDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Mail transport that records sends instead of speaking SMTP.
pub struct MockMail {
    log: CallLog,
    fail: bool,
}

impl MockMail {
    /// Create a mock that succeeds.
    pub fn new() -> Self {
        Self {
            log: CallLog::new(),
            fail: false,
        }
    }

    /// Create a mock whose send always fails.
    pub fn failing() -> Self {
        Self {
            log: CallLog::new(),
            fail: true,
        }
    }

    /// Handle to the call log.
    pub fn log(&self) -> CallLog {
        self.log.clone()
    }
}

impl MailTransport for MockMail {
    fn send(&self, month: &str, _report_dir: &Path, recipient: &str, sender: &str) -> Result<()> {
        if self.fail {
            return Err(SalescopeError::Delivery("mock delivery failure".to_string()));
        }
        self.log.record(format!("mail:{month}:{recipient}:{sender}"));
        Ok(())
    }
}

impl Default for MockMail {
    fn default() -> Self {
        Self::new()
    }
}
