//! Run command - generate reports for every sales file in a directory.

use std::path::PathBuf;

use colored::Colorize;
use salescope::ReportEngine;

use crate::console::ConsoleReporter;

pub fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.is_dir() {
        return Err(format!("Input directory not found: {}", input.display()).into());
    }

    let mut config = super::load_config(config_path)?;
    if let Some(output) = output {
        config.output_dir = output;
    }

    let engine =
        ReportEngine::with_config(config).with_reporter(ConsoleReporter::new(verbose));

    let summary = engine.run_directory(&input)?;

    println!();
    if summary.failed > 0 {
        println!(
            "{} {} report(s) generated, {} file(s) skipped",
            "Done:".green().bold(),
            summary.succeeded.to_string().white().bold(),
            summary.failed.to_string().yellow()
        );
    } else {
        println!(
            "{} {} report(s) generated",
            "Done:".green().bold(),
            summary.succeeded.to_string().white().bold()
        );
    }

    Ok(())
}
