//! Chart rendering collaborator.
//!
//! The pipeline hands a validated table and an output directory to a
//! [`ChartRenderer`]; what comes back is two image artifacts on disk. The
//! production implementation draws with the plotters bitmap backend.

use std::path::Path;

use plotters::element::Pie;
use plotters::prelude::*;

use crate::error::{Result, SalescopeError};
use crate::metrics::{daily_totals, product_totals};
use crate::table::SalesTable;

/// File name of the daily-totals line chart.
pub const TREND_FILE: &str = "sales_trend.png";
/// File name of the per-product share pie chart.
pub const DISTRIBUTION_FILE: &str = "product_dist.png";

/// Renders visualization artifacts for a sales table.
pub trait ChartRenderer: Send + Sync {
    /// Produce `sales_trend.png` and `product_dist.png` under `out_dir`.
    fn render(&self, table: &SalesTable, out_dir: &Path) -> Result<()>;
}

/// Chart renderer backed by plotters.
pub struct PlottersCharts;

impl PlottersCharts {
    /// Create a new renderer.
    pub fn new() -> Self {
        Self
    }

    fn render_trend(&self, table: &SalesTable, path: &Path) -> Result<()> {
        let totals = daily_totals(table);
        let days: Vec<String> = totals.keys().map(|d| d.format("%m-%d").to_string()).collect();
        let values: Vec<f64> = totals.values().copied().collect();
        let max = values.iter().cloned().fold(0.0_f64, f64::max);

        let root = BitMapBackend::new(path, (1000, 500)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let x_max = (days.len() as i32 - 1).max(1);
        let mut chart = ChartBuilder::on(&root)
            .caption("Daily Sales Trend", ("sans-serif", 30))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0..x_max, 0f64..(max * 1.1).max(1.0))
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .x_desc("Day")
            .y_desc("Sales")
            .x_label_formatter(&|idx| {
                days.get(*idx as usize).cloned().unwrap_or_default()
            })
            .draw()
            .map_err(render_err)?;

        chart
            .draw_series(LineSeries::new(
                values.iter().enumerate().map(|(i, v)| (i as i32, *v)),
                &TEAL,
            ))
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
        Ok(())
    }

    fn render_distribution(&self, table: &SalesTable, path: &Path) -> Result<()> {
        let totals = product_totals(table);
        let sizes: Vec<f64> = totals.values().copied().collect();
        let labels: Vec<String> = totals.keys().cloned().collect();
        let colors: Vec<RGBColor> = (0..sizes.len())
            .map(|i| PIE_COLORS[i % PIE_COLORS.len()])
            .collect();

        let root = BitMapBackend::new(path, (800, 800)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let center = (400, 400);
        let radius = 300.0;
        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.label_style(("sans-serif", 20).into_font());
        pie.percentages(("sans-serif", 16).into_font().color(&BLACK));

        root.draw(&pie).map_err(render_err)?;
        root.present().map_err(render_err)?;
        Ok(())
    }
}

impl ChartRenderer for PlottersCharts {
    fn render(&self, table: &SalesTable, out_dir: &Path) -> Result<()> {
        if table.is_empty() {
            return Err(SalescopeError::Render(
                "no records to chart".to_string(),
            ));
        }

        self.render_trend(table, &out_dir.join(TREND_FILE))?;
        self.render_distribution(table, &out_dir.join(DISTRIBUTION_FILE))?;
        Ok(())
    }
}

impl Default for PlottersCharts {
    fn default() -> Self {
        Self::new()
    }
}

/// Line color matching the trend chart's house style.
const TEAL: RGBColor = RGBColor(0, 128, 128);

/// Slice colors for the distribution pie, cycled as needed.
const PIE_COLORS: [RGBColor; 8] = [
    RGBColor(0, 128, 128),
    RGBColor(230, 126, 34),
    RGBColor(52, 152, 219),
    RGBColor(155, 89, 182),
    RGBColor(46, 204, 113),
    RGBColor(241, 196, 15),
    RGBColor(231, 76, 60),
    RGBColor(127, 140, 141),
];

fn render_err(e: impl std::fmt::Display) -> SalescopeError {
    SalescopeError::Render(e.to_string())
}
