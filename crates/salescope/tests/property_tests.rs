//! Property-based tests for metrics invariants.

use proptest::prelude::*;

use salescope::metrics::{format_currency, product_totals};
use salescope::{Insights, RawTable, SalesTable};

const PRODUCTS: [&str; 5] = ["Laptop", "Monitor", "Mouse", "Keyboard", "Webcam"];

/// Generated rows: (day of month, product index, quantity, price in cents).
fn arb_rows() -> impl Strategy<Value = Vec<(u32, usize, u32, u32)>> {
    prop::collection::vec((1u32..=28, 0usize..PRODUCTS.len(), 0u32..100, 0u32..50_000), 1..40)
}

fn build_table(rows: &[(u32, usize, u32, u32)]) -> SalesTable {
    let raw = RawTable::new(
        vec![
            "date".into(),
            "product".into(),
            "quantity".into(),
            "unit_price".into(),
        ],
        rows.iter()
            .map(|(day, product, quantity, cents)| {
                vec![
                    format!("2024-01-{day:02}"),
                    PRODUCTS[*product].to_string(),
                    quantity.to_string(),
                    format!("{:.2}", *cents as f64 / 100.0),
                ]
            })
            .collect(),
        b',',
    );
    SalesTable::from_raw(&raw).expect("generated table must build")
}

fn parse_currency(s: &str) -> f64 {
    s.trim_start_matches('$')
        .replace(',', "")
        .parse()
        .expect("currency string must parse back")
}

proptest! {
    #[test]
    fn prop_avg_order_is_total_over_count(rows in arb_rows()) {
        let table = build_table(&rows);
        let insights = Insights::compute(&table).unwrap();

        let total = parse_currency(&insights.total_sales);
        let avg = parse_currency(&insights.avg_order);

        // Each side is independently rounded to cents
        prop_assert!((avg - total / rows.len() as f64).abs() <= 0.011);
    }

    #[test]
    fn prop_top_product_has_max_summed_total(rows in arb_rows()) {
        let table = build_table(&rows);
        let insights = Insights::compute(&table).unwrap();

        let totals = product_totals(&table);
        let top_total = totals[&insights.top_product];
        for total in totals.values() {
            prop_assert!(*total <= top_total);
        }
    }

    #[test]
    fn prop_format_currency_round_trips(cents in 0u64..10_000_000_000_000) {
        let amount = cents as f64 / 100.0;
        let formatted = format_currency(amount);

        prop_assert!(formatted.starts_with('$'));
        let parsed = parse_currency(&formatted);
        prop_assert!((parsed - amount).abs() < 0.005);
    }
}
