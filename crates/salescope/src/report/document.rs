//! HTML/PDF document rendering collaborator.
//!
//! Writes `report.html` from the computed insights, then derives
//! `report.pdf` from it by invoking an HTML-to-PDF converter binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Result, SalescopeError};
use crate::metrics::Insights;

use super::charts::{DISTRIBUTION_FILE, TREND_FILE};

/// File name of the HTML report.
pub const HTML_FILE: &str = "report.html";
/// File name of the PDF report.
pub const PDF_FILE: &str = "report.pdf";

/// Paths of the rendered report documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub html: PathBuf,
    pub pdf: PathBuf,
}

/// Renders the report documents for a month's insights.
pub trait DocumentRenderer: Send + Sync {
    /// Write `report.html` and `report.pdf` under `out_dir`.
    fn render(&self, insights: &Insights, month: &str, out_dir: &Path) -> Result<RenderedReport>;
}

/// Document renderer that writes HTML directly and shells out to
/// `wkhtmltopdf` for the PDF.
pub struct HtmlPdfRenderer {
    pdf_command: String,
}

impl HtmlPdfRenderer {
    /// Create a renderer using the default `wkhtmltopdf` binary.
    pub fn new() -> Self {
        Self {
            pdf_command: "wkhtmltopdf".to_string(),
        }
    }

    /// Use a different HTML-to-PDF converter binary.
    pub fn with_pdf_command(mut self, command: impl Into<String>) -> Self {
        self.pdf_command = command.into();
        self
    }

    fn build_html(&self, insights: &Insights, month: &str) -> String {
        let title = format!("{} Sales Report", capitalize(month));

        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&format!(
            "<title>{}</title>\n",
            html_escape::encode_text(&title)
        ));
        html.push_str(
            "<style>\n\
             body { font-family: sans-serif; margin: 2em; }\n\
             table { border-collapse: collapse; }\n\
             td, th { border: 1px solid #ccc; padding: 0.4em 0.8em; text-align: left; }\n\
             img { max-width: 100%; margin-top: 1em; }\n\
             </style>\n</head>\n<body>\n",
        );
        html.push_str(&format!(
            "<h1>{}</h1>\n",
            html_escape::encode_text(&title)
        ));
        html.push_str("<table>\n");
        for (label, value) in [
            ("Period", format!("{} to {}", insights.start_date, insights.end_date)),
            ("Total sales", insights.total_sales.clone()),
            ("Average order", insights.avg_order.clone()),
            ("Top product", insights.top_product.clone()),
        ] {
            html.push_str(&format!(
                "<tr><th>{}</th><td>{}</td></tr>\n",
                label,
                html_escape::encode_text(&value)
            ));
        }
        html.push_str("</table>\n");
        html.push_str(&format!("<img src=\"{TREND_FILE}\" alt=\"Daily sales trend\">\n"));
        html.push_str(&format!(
            "<img src=\"{DISTRIBUTION_FILE}\" alt=\"Product distribution\">\n"
        ));
        html.push_str("</body>\n</html>\n");
        html
    }
}

impl DocumentRenderer for HtmlPdfRenderer {
    fn render(&self, insights: &Insights, month: &str, out_dir: &Path) -> Result<RenderedReport> {
        let html_path = out_dir.join(HTML_FILE);
        let pdf_path = out_dir.join(PDF_FILE);

        let html = self.build_html(insights, month);
        fs::write(&html_path, html).map_err(|e| SalescopeError::Io {
            path: html_path.clone(),
            source: e,
        })?;

        let output = Command::new(&self.pdf_command)
            .arg(&html_path)
            .arg(&pdf_path)
            .output()
            .map_err(|e| {
                SalescopeError::Render(format!(
                    "failed to run '{}': {}",
                    self.pdf_command, e
                ))
            })?;

        if !output.status.success() {
            return Err(SalescopeError::Render(format!(
                "'{}' exited with {}: {}",
                self.pdf_command,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(RenderedReport {
            html: html_path,
            pdf: pdf_path,
        })
    }
}

impl Default for HtmlPdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Capitalize the first character, for month names in titles.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_insights() -> Insights {
        Insights {
            start_date: "2024-01-05".to_string(),
            end_date: "2024-01-10".to_string(),
            total_sales: "$1,498.99".to_string(),
            avg_order: "$749.50".to_string(),
            top_product: "Laptop <Pro>".to_string(),
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("january"), "January");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_build_html_escapes_values() {
        let html = HtmlPdfRenderer::new().build_html(&sample_insights(), "january");

        assert!(html.contains("<h1>January Sales Report</h1>"));
        assert!(html.contains("Laptop &lt;Pro&gt;"));
        assert!(!html.contains("Laptop <Pro>"));
        assert!(html.contains("sales_trend.png"));
        assert!(html.contains("product_dist.png"));
    }

    #[test]
    fn test_missing_pdf_binary_is_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = HtmlPdfRenderer::new().with_pdf_command("definitely-not-a-real-binary");

        let err = renderer
            .render(&sample_insights(), "january", dir.path())
            .unwrap_err();
        assert!(matches!(err, SalescopeError::Render(_)));

        // The HTML half is still written before PDF conversion fails
        assert!(dir.path().join(HTML_FILE).exists());
    }
}
