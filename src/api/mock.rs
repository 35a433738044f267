use super::{DataProvider, FetchError, HistoricalSeries, QuoteRecord, Range};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::sync::Mutex;

/// Random quote and history generator.
///
/// All values are drawn as whole cents so they render with exactly two
/// fraction digits.
#[derive(Debug)]
pub struct MockProvider {
    rng: Mutex<StdRng>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic generator for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn quote(&self, symbol: &str) -> Result<QuoteRecord, FetchError> {
        let mut rng = self.lock()?;
        Ok(QuoteRecord {
            symbol: symbol.to_string(),
            name: format!("{} Company", symbol),
            price: cents(rng.gen_range(0..=50_000)),
            change: cents(rng.gen_range(-500..500)),
            change_percent: cents(rng.gen_range(-250..250)),
            market_cap: format!("{}B", cents(rng.gen_range(0..=50_000))),
        })
    }

    pub fn history(&self, range: Range) -> Result<HistoricalSeries, FetchError> {
        let mut rng = self.lock()?;
        let points = range.points();
        let labels = (1..=points).map(|i| format!("Day {}", i)).collect();
        let values = (0..points)
            .map(|_| cents(rng.gen_range(0..=50_000)))
            .collect();
        Ok(HistoricalSeries { labels, values })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, StdRng>, FetchError> {
        self.rng
            .lock()
            .map_err(|_| FetchError::Unavailable("mock generator poisoned".to_string()))
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DataProvider for MockProvider {
    async fn fetch_quote(&self, symbol: &str) -> Result<QuoteRecord, FetchError> {
        self.quote(symbol)
    }

    async fn fetch_history(&self, _symbol: &str, range: Range) -> Result<HistoricalSeries, FetchError> {
        self.history(range)
    }
}

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}
