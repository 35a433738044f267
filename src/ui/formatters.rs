use crate::api::HistoricalSeries;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

pub fn format_price(price: Decimal) -> String {
    format!("${}", price)
}

pub fn format_change(change: Decimal) -> String {
    if change.is_sign_negative() && !change.is_zero() {
        format!("{}", change)
    } else {
        format!("+{}", change.abs())
    }
}

pub fn format_change_percent(change_percent: Decimal) -> String {
    format!("({}%)", change_percent)
}

pub fn format_market_cap(market_cap: &str) -> String {
    format!("${}", market_cap)
}

pub fn is_gain(change: Decimal) -> bool {
    !change.is_sign_negative() || change.is_zero()
}

pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let end = s
            .char_indices()
            .nth(max_len.saturating_sub(3))
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        format!("{}...", &s[..end])
    } else {
        s.to_string()
    }
}

/// `(index, value)` pairs for a line chart, skipping values that do not fit an `f64`.
pub fn chart_points(series: &HistoricalSeries) -> Vec<(f64, f64)> {
    series
        .values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.to_f64().map(|v| (i as f64, v)))
        .collect()
}

/// Lower and upper y bounds with a little headroom; `[0, 1]` for an empty series.
pub fn chart_bounds(series: &HistoricalSeries) -> [f64; 2] {
    match (
        series.low().and_then(|v| v.to_f64()),
        series.high().and_then(|v| v.to_f64()),
    ) {
        (Some(low), Some(high)) => {
            let pad = ((high - low) / 20.0).max(1.0);
            [(low - pad).max(0.0), high + pad]
        }
        _ => [0.0, 1.0],
    }
}
