//! Metrics file export - one-row CSV snapshots of computed insights.

use std::path::Path;

use crate::error::{Result, SalescopeError};
use crate::metrics::Insights;

/// Write insights as a one-row CSV file.
///
/// Column order follows the `Insights` field order. The file is truncated
/// on create, so re-running for the same month overwrites the prior
/// snapshot instead of appending.
pub fn write_metrics(insights: &Insights, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    let mut writer = csv::Writer::from_path(path).map_err(SalescopeError::Csv)?;
    writer.serialize(insights)?;
    writer.flush().map_err(|e| SalescopeError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Read a previously written metrics file back into insights.
pub fn read_metrics(path: impl AsRef<Path>) -> Result<Insights> {
    let path = path.as_ref();

    let mut reader = csv::Reader::from_path(path).map_err(SalescopeError::Csv)?;
    let mut rows = reader.deserialize::<Insights>();

    match rows.next() {
        Some(row) => Ok(row?),
        None => Err(SalescopeError::EmptyTable(format!(
            "metrics file '{}' has no data row",
            path.display()
        ))),
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
            top_product: "Laptop".to_string(),
        }
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.csv");

        let insights = sample_insights();
        write_metrics(&insights, &path).unwrap();
        let restored = read_metrics(&path).unwrap();

        assert_eq!(restored, insights);
    }

    #[test]
    fn test_header_column_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.csv");

        write_metrics(&sample_insights(), &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let header = contents.lines().next().unwrap();

        assert_eq!(header, "start_date,end_date,total_sales,avg_order,top_product");
    }

    #[test]
    fn test_rewrite_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.csv");

        write_metrics(&sample_insights(), &path).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();

        write_metrics(&sample_insights(), &path).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(second.lines().count(), 2); // header + one row
    }
}
