//! Checks that decide whether a raw table is usable.
//!
//! Validation is all-or-nothing per file: a single uncoercible cell rejects
//! the whole table. Checks run against raw string cells so the typed layer
//! only ever sees data that is known to convert.

use crate::error::{Result, SalescopeError};
use crate::input::RawTable;
use crate::table::{REQUIRED_COLUMNS, parse_date};

/// A single validation rule over a raw table.
pub trait Check {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Run the check, failing with the specific rejection reason.
    fn run(&self, table: &RawTable) -> Result<()>;
}

/// Verifies the required column set is a subset of the table's headers.
pub struct SchemaCheck;

impl Check for SchemaCheck {
    fn name(&self) -> &'static str {
        "schema"
    }

    fn run(&self, table: &RawTable) -> Result<()> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| table.column_index(name).is_none())
            .map(|name| name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(SalescopeError::Schema { missing })
        }
    }
}

/// Verifies whole-column coercibility of the typed columns.
///
/// `quantity` and `unit_price` must parse as numbers, `date` as a calendar
/// date, and `product` must be non-empty, for every row.
pub struct CoercionCheck;

impl Check for CoercionCheck {
    fn name(&self) -> &'static str {
        "coercion"
    }

    fn run(&self, table: &RawTable) -> Result<()> {
        for column in ["quantity", "unit_price"] {
            let Some(idx) = table.column_index(column) else {
                continue;
            };
            for (row, value) in table.column_values(idx).enumerate() {
                if value.trim().parse::<f64>().is_err() {
                    return Err(SalescopeError::Coercion {
                        column: column.to_string(),
                        expected: "a number",
                        row,
                        value: value.to_string(),
                    });
                }
            }
        }

        if let Some(idx) = table.column_index("date") {
            for (row, value) in table.column_values(idx).enumerate() {
                if parse_date(value).is_none() {
                    return Err(SalescopeError::Coercion {
                        column: "date".to_string(),
                        expected: "a calendar date",
                        row,
                        value: value.to_string(),
                    });
                }
            }
        }

        if let Some(idx) = table.column_index("product") {
            for (row, value) in table.column_values(idx).enumerate() {
                if RawTable::is_null_value(value) {
                    return Err(SalescopeError::Coercion {
                        column: "product".to_string(),
                        expected: "a non-empty product identifier",
                        row,
                        value: value.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Runs every check against a raw table, accepting or rejecting it whole.
pub struct TableValidator {
    checks: Vec<Box<dyn Check>>,
}

impl TableValidator {
    /// Create a validator with the standard checks.
    pub fn new() -> Self {
        Self {
            checks: vec![Box::new(SchemaCheck), Box::new(CoercionCheck)],
        }
    }

    /// Validate a raw table. Returns the first failure encountered;
    /// schema problems are reported before cell-level ones.
    pub fn validate(&self, table: &RawTable) -> Result<()> {
        for check in &self.checks {
            log::debug!("running {} check", check.name());
            check.run(table)?;
        }
        Ok(())
    }
}

impl Default for TableValidator {
    fn default() -> Self {
        Self::new()
    }
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
    fn test_accepts_required_columns() {
        let table = raw(
            &["date", "product", "quantity", "unit_price"],
            &[&["2024-01-05", "Laptop", "1", "999.99"]],
        );
        assert!(TableValidator::new().validate(&table).is_ok());
    }

    #[test]
    fn test_accepts_extra_columns() {
        let table = raw(
            &["date", "product", "quantity", "unit_price", "region"],
            &[&["2024-01-05", "Laptop", "1", "999.99", "EU"]],
        );
        assert!(TableValidator::new().validate(&table).is_ok());
    }

    #[test]
    fn test_rejects_missing_columns() {
        let table = raw(&["date", "product"], &[&["2024-01-05", "Laptop"]]);
        let err = TableValidator::new().validate(&table).unwrap_err();

        match err {
            SalescopeError::Schema { missing } => {
                assert_eq!(missing, vec!["quantity", "unit_price"]);
            }
            other => panic!("expected Schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_non_numeric_quantity() {
        let table = raw(
            &["date", "product", "quantity", "unit_price"],
            &[
                &["2024-01-05", "Laptop", "1", "999.99"],
                &["2024-01-06", "Mouse", "a few", "19.99"],
            ],
        );
        let err = TableValidator::new().validate(&table).unwrap_err();

        match err {
            SalescopeError::Coercion { column, row, .. } => {
                assert_eq!(column, "quantity");
                assert_eq!(row, 1);
            }
            other => panic!("expected Coercion error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unparseable_date() {
        let table = raw(
            &["date", "product", "quantity", "unit_price"],
            &[&["sometime", "Laptop", "1", "999.99"]],
        );
        let err = TableValidator::new().validate(&table).unwrap_err();
        assert!(matches!(err, SalescopeError::Coercion { ref column, .. } if column == "date"));
    }

    #[test]
    fn test_rejects_empty_product() {
        let table = raw(
            &["date", "product", "quantity", "unit_price"],
            &[&["2024-01-05", "", "1", "999.99"]],
        );
        let err = TableValidator::new().validate(&table).unwrap_err();
        assert!(matches!(err, SalescopeError::Coercion { ref column, .. } if column == "product"));
    }

    #[test]
    fn test_schema_failure_reported_before_coercion() {
        // quantity column is both missing and (were it present) uncoercible;
        // the missing-column failure must win
        let table = raw(&["date", "product"], &[&["not-a-date", "Laptop"]]);
        let err = TableValidator::new().validate(&table).unwrap_err();
        assert!(matches!(err, SalescopeError::Schema { .. }));
    }

    #[test]
    fn test_accepts_header_only_table() {
        // An empty table passes validation; emptiness is a report-level
        // failure, not a validation failure
        let table = raw(&["date", "product", "quantity", "unit_price"], &[]);
        assert!(TableValidator::new().validate(&table).is_ok());
    }
}
