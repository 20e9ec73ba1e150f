//! # Order Table Rendering Tests
//!
//! Renders the recent-orders table the way the dashboard page does: each
//! stored order through the currency, date and badge helpers.

use stocksense_dashboard::{Dashboard, format_currency, format_date, status_badge};

#[test]
fn recent_orders_render_as_table_rows() {
    let rows: Vec<(String, String, String)> = Dashboard::default()
        .recent_orders(None)
        .into_iter()
        .map(|o| {
            let iso = o.date.format("%Y-%m-%dT%H:%M:%S").to_string();
            (
                format_currency(o.total),
                format_date(&iso),
                status_badge(o.status.as_str()),
            )
        })
        .collect();

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].0, "₱14,275.00");
    assert_eq!(rows[0].1, "Feb 28, 10:30 AM");
    assert!(rows[0].2.contains("emerald"));

    assert_eq!(rows[2].0, "₱32,567.50");
    assert_eq!(rows[2].1, "Feb 27, 04:20 PM");
    assert!(rows[2].2.contains(">Processing<"));

    assert_eq!(rows[4].0, "₱24,932.25");
}

#[test]
fn stats_cards_render() {
    let stats = Dashboard::default().stats();
    assert_eq!(format_currency(stats.sales_today), "₱724,500.00");

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["lowStock"], 23);
    assert_eq!(json["ordersTrend"], "+23");
}
