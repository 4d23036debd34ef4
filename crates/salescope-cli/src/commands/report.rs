//! Report command - generate the report for a single sales file.

use std::path::PathBuf;

use colored::Colorize;
use salescope::ReportEngine;

use crate::console::ConsoleReporter;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let mut config = super::load_config(config_path)?;
    if let Some(output) = output {
        config.output_dir = output;
    }

    let engine =
        ReportEngine::with_config(config).with_reporter(ConsoleReporter::new(verbose));

    let insights = engine.generate(&file)?;

    println!();
    println!("{}", "Insights:".yellow().bold());
    println!("  {:12} {} to {}", "Period", insights.start_date, insights.end_date);
    println!("  {:12} {}", "Total", insights.total_sales);
    println!("  {:12} {}", "Avg order", insights.avg_order);
    println!("  {:12} {}", "Top product", insights.top_product);

    Ok(())
}
