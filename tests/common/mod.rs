#![allow(dead_code)]

use rust_decimal::Decimal;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use stockwatch::api::{DataProvider, FetchError, HistoricalSeries, QuoteRecord, Range};
use stockwatch::app::{App, Settings};
use stockwatch::store::{MemoryStorage, WatchlistStore};

/// Deterministic provider that counts calls and can be told to fail.
#[derive(Debug, Default)]
pub struct FakeProvider {
    quote_calls: AtomicUsize,
    history_calls: AtomicUsize,
    fail_quotes: AtomicBool,
    fail_history: AtomicBool,
}

impl FakeProvider {
    pub fn quote_calls(&self) -> usize {
        self.quote_calls.load(Ordering::SeqCst)
    }

    pub fn history_calls(&self) -> usize {
        self.history_calls.load(Ordering::SeqCst)
    }

    pub fn set_fail_quotes(&self, fail: bool) {
        self.fail_quotes.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_history(&self, fail: bool) {
        self.fail_history.store(fail, Ordering::SeqCst);
    }
}

impl DataProvider for FakeProvider {
    async fn fetch_quote(&self, symbol: &str) -> Result<QuoteRecord, FetchError> {
        self.quote_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_quotes.load(Ordering::SeqCst) {
            return Err(FetchError::Unavailable("offline".to_string()));
        }
        Ok(make_quote(symbol, &format!("{} Company", symbol)))
    }

    async fn fetch_history(&self, _symbol: &str, range: Range) -> Result<HistoricalSeries, FetchError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_history.load(Ordering::SeqCst) {
            return Err(FetchError::Unavailable("offline".to_string()));
        }
        Ok(make_series(range.points()))
    }
}

pub fn make_quote(symbol: &str, name: &str) -> QuoteRecord {
    QuoteRecord {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price: Decimal::new(12345, 2),
        change: Decimal::new(-150, 2),
        change_percent: Decimal::new(-121, 2),
        market_cap: "42.00B".to_string(),
    }
}

pub fn make_series(points: usize) -> HistoricalSeries {
    HistoricalSeries {
        labels: (1..=points).map(|i| format!("Day {}", i)).collect(),
        values: (1..=points).map(|i| Decimal::new(i as i64 * 100, 2)).collect(),
    }
}

pub fn test_app() -> App<FakeProvider, MemoryStorage> {
    test_app_with(MemoryStorage::new())
}

// App over an existing storage, so tests can inspect what was persisted.
pub fn test_app_with(storage: MemoryStorage) -> App<FakeProvider, MemoryStorage> {
    App::new(
        FakeProvider::default(),
        WatchlistStore::load(storage),
        Settings::default(),
    )
}
