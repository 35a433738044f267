use rust_decimal::Decimal;
use stockwatch::api::HistoricalSeries;
use stockwatch::ui::formatters::*;

fn d(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

// --- quote fields ---

#[test]
fn test_format_price() {
    assert_eq!(format_price(d(12345)), "$123.45");
    assert_eq!(format_price(d(0)), "$0.00");
}

#[test]
fn test_format_change_positive() {
    assert_eq!(format_change(d(125)), "+1.25");
}

#[test]
fn test_format_change_negative() {
    assert_eq!(format_change(d(-42)), "-0.42");
}

#[test]
fn test_format_change_zero() {
    assert_eq!(format_change(d(0)), "+0.00");
}

#[test]
fn test_format_change_percent() {
    assert_eq!(format_change_percent(d(-121)), "(-1.21%)");
    assert_eq!(format_change_percent(d(75)), "(0.75%)");
}

#[test]
fn test_format_market_cap() {
    assert_eq!(format_market_cap("42.00B"), "$42.00B");
}

#[test]
fn test_is_gain() {
    assert!(is_gain(d(1)));
    assert!(is_gain(d(0)));
    assert!(!is_gain(d(-1)));
}

// --- truncate_str ---

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate_str("Acme", 10), "Acme");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate_str("Acme Corporation", 10), "Acme Co...");
}

#[test]
fn test_truncate_unicode() {
    assert_eq!(truncate_str("Ünïcödé Nämé", 8), "Ünïcö...");
}

// --- chart helpers ---

#[test]
fn test_chart_points_are_indexed() {
    let series = HistoricalSeries {
        labels: vec!["Day 1".into(), "Day 2".into()],
        values: vec![d(1050), d(2000)],
    };
    assert_eq!(chart_points(&series), vec![(0.0, 10.5), (1.0, 20.0)]);
}

#[test]
fn test_chart_bounds_pad_range() {
    let series = HistoricalSeries {
        labels: vec!["Day 1".into(), "Day 2".into()],
        values: vec![d(10000), d(30000)],
    };
    assert_eq!(chart_bounds(&series), [90.0, 310.0]);
}

#[test]
fn test_chart_bounds_empty_series() {
    assert_eq!(chart_bounds(&HistoricalSeries::default()), [0.0, 1.0]);
}
