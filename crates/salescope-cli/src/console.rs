//! Colored console progress output.

use colored::Colorize;
use salescope::{ReportEvent, Reporter, Stage};

/// Reporter that prints per-file progress lines to the terminal.
pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a console reporter.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, event: ReportEvent) {
        match event {
            ReportEvent::StageStarted {
                file,
                stage: Stage::Loading,
            } => {
                println!("{} {}", "Processing".cyan().bold(), file.white());
            }
            ReportEvent::StageStarted { .. } => {}
            ReportEvent::Loaded {
                rows, columns, ..
            } => {
                if self.verbose {
                    println!("  {} rows, {} columns", rows, columns);
                }
            }
            ReportEvent::StageFailed { file, stage, error } => {
                eprintln!(
                    "{} {} during {}: {}",
                    "Skipped".yellow().bold(),
                    file.white(),
                    stage,
                    error
                );
            }
            ReportEvent::Completed {
                month,
                start_date,
                end_date,
                ..
            } => {
                println!(
                    "{} report for {} to {} ({})",
                    "Generated".green().bold(),
                    start_date.white(),
                    end_date.white(),
                    month
                );
            }
        }
    }
}
