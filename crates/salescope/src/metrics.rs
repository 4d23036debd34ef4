//! Summary metrics derived from a validated sales table.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SalescopeError};
use crate::table::SalesTable;

/// Derived summary metrics for one sales table.
///
/// Fields are pre-formatted strings; declaration order is the column order
/// of the exported metrics file. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    /// Earliest transaction date, ISO formatted.
    pub start_date: String,
    /// Latest transaction date, ISO formatted.
    pub end_date: String,
    /// Sum of line totals, currency formatted.
    pub total_sales: String,
    /// Mean line total, currency formatted.
    pub avg_order: String,
    /// Product with the greatest summed total.
    pub top_product: String,
}

impl Insights {
    /// Compute insights from a validated table.
    ///
    /// Pure and deterministic: no I/O, and ties for the top product are
    /// broken by first-seen input order.
    pub fn compute(table: &SalesTable) -> Result<Self> {
        let records = table.records();
        if records.is_empty() {
            return Err(SalescopeError::EmptyTable(
                "no records to compute insights from".to_string(),
            ));
        }

        let mut start = records[0].date;
        let mut end = records[0].date;
        let mut sum = 0.0;
        for record in records {
            if record.date < start {
                start = record.date;
            }
            if record.date > end {
                end = record.date;
            }
            sum += record.total;
        }

        // Strictly-greater comparison keeps the first-seen product on ties
        let mut top_product = String::new();
        let mut top_total = f64::NEG_INFINITY;
        for (product, total) in product_totals(table) {
            if total > top_total {
                top_total = total;
                top_product = product;
            }
        }

        Ok(Self {
            start_date: start.format("%Y-%m-%d").to_string(),
            end_date: end.format("%Y-%m-%d").to_string(),
            total_sales: format_currency(sum),
            avg_order: format_currency(sum / records.len() as f64),
            top_product,
        })
    }
}

/// Per-product summed totals, keyed in first-seen input order.
pub fn product_totals(table: &SalesTable) -> IndexMap<String, f64> {
    let mut totals: IndexMap<String, f64> = IndexMap::new();
    for record in table.records() {
        *totals.entry(record.product.clone()).or_insert(0.0) += record.total;
    }
    totals
}

/// Per-day summed totals in chronological order.
pub fn daily_totals(table: &SalesTable) -> BTreeMap<NaiveDate, f64> {
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in table.records() {
        *totals.entry(record.date).or_insert(0.0) += record.total;
    }
    totals
}

/// Lowercase full month name for a date, used as the report directory key.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B").to_string().to_lowercase()
}

/// Format an amount as currency: two decimals, thousands separators,
/// `$` prefix.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}
