pub mod http;
pub mod mock;

pub use http::HttpProvider;
pub use mock::MockProvider;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub symbol: String,
    pub name: String,
    pub price: Decimal,
    pub change: Decimal,
    #[serde(rename = "changePercent")]
    pub change_percent: Decimal,
    #[serde(rename = "marketCap")]
    pub market_cap: String,
}

/// Index-aligned labels and closing values, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoricalSeries {
    pub labels: Vec<String>,
    #[serde(rename = "data")]
    pub values: Vec<Decimal>,
}

impl HistoricalSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn high(&self) -> Option<Decimal> {
        self.values.iter().copied().max()
    }

    pub fn low(&self) -> Option<Decimal> {
        self.values.iter().copied().min()
    }
}

/// Historical window selectable on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Range {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    OneWeek,
    #[default]
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "1y")]
    OneYear,
}

impl Range {
    pub const ALL: [Range; 5] = [
        Range::OneDay,
        Range::OneWeek,
        Range::OneMonth,
        Range::ThreeMonths,
        Range::OneYear,
    ];

    /// Number of points in a series for this window.
    pub fn points(&self) -> usize {
        match self {
            Range::OneDay => 24,
            Range::OneWeek => 7,
            Range::OneMonth => 30,
            Range::ThreeMonths => 90,
            Range::OneYear => 365,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Range::OneDay => "1d",
            Range::OneWeek => "1w",
            Range::OneMonth => "1m",
            Range::ThreeMonths => "3m",
            Range::OneYear => "1y",
        }
    }

    /// Lenient parse used by the HTTP surface: anything missing or unknown is
    /// the one-year bucket.
    pub fn from_query(raw: Option<&str>) -> Range {
        raw.and_then(|r| r.parse().ok()).unwrap_or(Range::OneYear)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown range '{0}'")]
pub struct ParseRangeError(String);

impl FromStr for Range {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1d" => Ok(Range::OneDay),
            "1w" => Ok(Range::OneWeek),
            "1m" => Ok(Range::OneMonth),
            "3m" => Ok(Range::ThreeMonths),
            "1y" => Ok(Range::OneYear),
            other => Err(ParseRangeError(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(u16),
    #[error("invalid request url: {0}")]
    Url(String),
    #[error("{0}")]
    Unavailable(String),
}

/// Source of quotes and historical series.
pub trait DataProvider {
    fn fetch_quote(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<QuoteRecord, FetchError>> + Send;

    fn fetch_history(
        &self,
        symbol: &str,
        range: Range,
    ) -> impl Future<Output = Result<HistoricalSeries, FetchError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_points_match_buckets() {
        let points: Vec<usize> = Range::ALL.iter().map(Range::points).collect();
        assert_eq!(points, vec![24, 7, 30, 90, 365]);
    }

    #[test]
    fn range_from_query_defaults_to_one_year() {
        assert_eq!(Range::from_query(None), Range::OneYear);
        assert_eq!(Range::from_query(Some("5y")), Range::OneYear);
        assert_eq!(Range::from_query(Some("1w")), Range::OneWeek);
    }

    #[test]
    fn quote_serializes_decimals_as_strings() {
        let quote = QuoteRecord {
            symbol: "ACME".into(),
            name: "ACME Company".into(),
            price: Decimal::new(12345, 2),
            change: Decimal::new(-150, 2),
            change_percent: Decimal::new(75, 2),
            market_cap: "12.50B".into(),
        };
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["price"], "123.45");
        assert_eq!(json["change"], "-1.50");
        assert_eq!(json["changePercent"], "0.75");
        assert_eq!(json["marketCap"], "12.50B");
    }
}
