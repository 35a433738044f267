use super::{App, HISTORY_FETCH_FAILED, NO_SYMBOL, Page, QUOTE_FETCH_FAILED, ViewError};
use crate::api::{DataProvider, FetchError, HistoricalSeries, QuoteRecord, Range};
use crate::store::{Storage, normalize_symbol};
use chrono::Local;

/// An issued history fetch. Only the most recently issued request for the
/// current scope may update the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub symbol: String,
    pub range: Range,
    generation: u64,
}

impl<P: DataProvider, S: Storage> App<P, S> {
    /// Enter the dashboard for `symbol`, fetching its quote and the default
    /// range of history. Without a symbol nothing is fetched.
    pub async fn open_dashboard(&mut self, symbol: Option<&str>) -> Result<(), ViewError> {
        self.page = Page::Dashboard;
        self.reset_scope();

        let Some(symbol) = symbol.and_then(normalize_symbol) else {
            return self.report(Err(ViewError::Validation(NO_SYMBOL)));
        };
        tracing::info!(%symbol, "opening dashboard");
        self.scope = Some(symbol.clone());

        let Some(request) = self.begin_history_request(self.settings.default_range) else {
            return Ok(());
        };
        self.loading = true;
        let (quote, history) = futures::join!(
            self.provider.fetch_quote(&symbol),
            self.provider.fetch_history(&symbol, request.range),
        );
        self.loading = false;

        let quote_result = self.complete_quote(&symbol, quote);
        let history_result = self.complete_history(request, history);
        quote_result.and(history_result)
    }

    /// Re-fetch only the history for the current scope.
    pub async fn select_range(&mut self, range: Range) -> Result<(), ViewError> {
        let Some(request) = self.begin_history_request(range) else {
            return Ok(());
        };
        let result = self.provider.fetch_history(&request.symbol, request.range).await;
        self.complete_history(request, result)
    }

    /// Issue a history request for the current scope, superseding any request
    /// still outstanding. `None` when no symbol is in scope.
    pub fn begin_history_request(&mut self, range: Range) -> Option<HistoryRequest> {
        let symbol = self.scope.clone()?;
        self.history_generation += 1;
        Some(HistoryRequest {
            symbol,
            range,
            generation: self.history_generation,
        })
    }

    /// Apply a history response. Responses to superseded requests are dropped
    /// without touching the rendered state.
    pub fn complete_history(
        &mut self,
        request: HistoryRequest,
        result: Result<HistoricalSeries, FetchError>,
    ) -> Result<(), ViewError> {
        if request.generation != self.history_generation
            || self.scope.as_deref() != Some(request.symbol.as_str())
        {
            tracing::debug!(symbol = %request.symbol, range = %request.range, "discarding stale history response");
            return Ok(());
        }
        match result {
            Ok(series) => {
                self.history = Some(series);
                self.range = request.range;
                Ok(())
            }
            Err(source) => self.report(Err(ViewError::Fetch {
                context: HISTORY_FETCH_FAILED,
                source,
            })),
        }
    }

    fn complete_quote(
        &mut self,
        symbol: &str,
        result: Result<QuoteRecord, FetchError>,
    ) -> Result<(), ViewError> {
        if self.scope.as_deref() != Some(symbol) {
            return Ok(());
        }
        match result {
            Ok(quote) => {
                self.quote = Some(quote);
                self.last_updated = Some(Local::now().format("%H:%M:%S").to_string());
                Ok(())
            }
            Err(source) => self.report(Err(ViewError::Fetch {
                context: QUOTE_FETCH_FAILED,
                source,
            })),
        }
    }

    /// Name shown next to the symbol in scope: the quote's name once one has
    /// rendered, otherwise the symbol itself.
    pub fn display_name(&self) -> Option<String> {
        let symbol = self.scope.as_deref()?;
        match &self.quote {
            Some(q) if q.symbol == symbol => Some(q.name.clone()),
            _ => Some(symbol.to_string()),
        }
    }
}
