//! Typed sales table built from an accepted raw table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SalescopeError};
use crate::input::RawTable;

/// Columns every sales table must provide.
pub const REQUIRED_COLUMNS: [&str; 4] = ["date", "product", "quantity", "unit_price"];

/// Date formats accepted for the `date` column.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a date cell, trying each accepted format in order.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// One validated transaction row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date.
    pub date: NaiveDate,
    /// Product identifier.
    pub product: String,
    /// Units sold.
    pub quantity: f64,
    /// Price per unit.
    pub unit_price: f64,
    /// Derived line total, `quantity * unit_price`.
    pub total: f64,
}

/// An ordered collection of transactions from one input file.
///
/// Built only from a raw table that has passed validation; the derived
/// `total` field is computed here, once, per record.
#[derive(Debug, Clone)]
pub struct SalesTable {
    records: Vec<Transaction>,
}

impl SalesTable {
    /// Build a typed table from an accepted raw table.
    ///
    /// Expects validation to have run first. Missing required columns or
    /// uncoercible cells still fail with the matching error rather than
    /// panicking, so this is safe to call on an unvalidated table too.
    pub fn from_raw(raw: &RawTable) -> Result<Self> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| raw.column_index(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(SalescopeError::Schema { missing });
        }

        let date_idx = raw.column_index("date").unwrap_or(0);
        let product_idx = raw.column_index("product").unwrap_or(0);
        let quantity_idx = raw.column_index("quantity").unwrap_or(0);
        let price_idx = raw.column_index("unit_price").unwrap_or(0);

        let mut records = Vec::with_capacity(raw.row_count());
        for (row_idx, row) in raw.rows.iter().enumerate() {
            let date_cell = row.get(date_idx).map(|s| s.as_str()).unwrap_or("");
            let date = parse_date(date_cell).ok_or_else(|| SalescopeError::Coercion {
                column: "date".to_string(),
                expected: "a calendar date",
                row: row_idx,
                value: date_cell.to_string(),
            })?;

            let product = row
                .get(product_idx)
                .map(|s| s.trim().to_string())
                .unwrap_or_default();
            if product.is_empty() {
                return Err(SalescopeError::Coercion {
                    column: "product".to_string(),
                    expected: "a non-empty product identifier",
                    row: row_idx,
                    value: String::new(),
                });
            }

            let quantity = parse_numeric(raw, row_idx, quantity_idx, "quantity")?;
            let unit_price = parse_numeric(raw, row_idx, price_idx, "unit_price")?;

            records.push(Transaction {
                date,
                product,
                quantity,
                unit_price,
                total: quantity * unit_price,
            });
        }

        Ok(Self { records })
    }

    /// The transaction records in input order.
    pub fn records(&self) -> &[Transaction] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first record, if any. Report month labels derive from it.
    pub fn first(&self) -> Option<&Transaction> {
        self.records.first()
    }
}

fn parse_numeric(raw: &RawTable, row_idx: usize, col_idx: usize, column: &str) -> Result<f64> {
    let cell = raw.get(row_idx, col_idx).unwrap_or("");
    cell.trim()
        .parse::<f64>()
        .map_err(|_| SalescopeError::Coercion {
            column: column.to_string(),
            expected: "a number",
            row: row_idx,
            value: cell.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable::new(
            headers.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
            b',',
        )
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(parse_date("2024-01-05"), Some(expected));
        assert_eq!(parse_date("2024/01/05"), Some(expected));
        assert_eq!(parse_date("01/05/2024"), Some(expected));
        assert_eq!(parse_date(" 2024-01-05 "), Some(expected));
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_from_raw_computes_totals() {
        let table = SalesTable::from_raw(&raw(
            &["date", "product", "quantity", "unit_price"],
            &[
                &["2024-01-05", "Laptop", "1", "999.99"],
                &["2024-01-10", "Monitor", "2", "249.50"],
            ],
        ))
        .unwrap();

        assert_eq!(table.len(), 2);
        assert!((table.records()[0].total - 999.99).abs() < 1e-9);
        assert!((table.records()[1].total - 499.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_raw_column_order_does_not_matter() {
        let table = SalesTable::from_raw(&raw(
            &["product", "unit_price", "date", "quantity", "region"],
            &[&["Laptop", "999.99", "2024-01-05", "1", "EU"]],
        ))
        .unwrap();

        assert_eq!(table.records()[0].product, "Laptop");
        assert!((table.records()[0].unit_price - 999.99).abs() < 1e-9);
    }

    #[test]
    fn test_from_raw_missing_columns() {
        let err = SalesTable::from_raw(&raw(&["date", "product"], &[&["2024-01-05", "Laptop"]]))
            .unwrap_err();

        match err {
            SalescopeError::Schema { missing } => {
                assert_eq!(missing, vec!["quantity", "unit_price"]);
            }
            other => panic!("expected Schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_raw_bad_quantity() {
        let err = SalesTable::from_raw(&raw(
            &["date", "product", "quantity", "unit_price"],
            &[&["2024-01-05", "Laptop", "many", "999.99"]],
        ))
        .unwrap_err();

        assert!(matches!(err, SalescopeError::Coercion { ref column, .. } if column == "quantity"));
    }

    #[test]
    fn test_from_raw_bad_date() {
        let err = SalesTable::from_raw(&raw(
            &["date", "product", "quantity", "unit_price"],
            &[&["someday", "Laptop", "1", "999.99"]],
        ))
        .unwrap_err();

        assert!(matches!(err, SalescopeError::Coercion { ref column, .. } if column == "date"));
    }
}
