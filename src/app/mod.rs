mod dashboard;
mod notice;
mod search;
mod watchlist;

pub use dashboard::HistoryRequest;
pub use notice::{Notice, NoticeKind};

use crate::api::{DataProvider, FetchError, HistoricalSeries, QuoteRecord, Range};
use crate::config::{Config, MAX_NOTICE_SECS};
use crate::store::{Storage, StoreError, WatchlistStore};
use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;

pub const NO_SYMBOL: &str = "No stock symbol provided";
pub const EMPTY_SEARCH: &str = "Please enter a stock symbol";
pub const ALREADY_IN_WATCHLIST: &str = "Stock already in watchlist";
pub const ADDED_TO_WATCHLIST: &str = "Added to watchlist";
pub const QUOTE_FETCH_FAILED: &str = "Failed to fetch stock data";
pub const HISTORY_FETCH_FAILED: &str = "Failed to fetch historical data";

/// Failures recovered at the controller boundary. `Display` is the text shown
/// to the user.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("Stock already in watchlist")]
    Conflict(String),
    #[error("{context}")]
    Fetch {
        context: &'static str,
        #[source]
        source: FetchError,
    },
    #[error("Failed to save watchlist")]
    Storage(#[source] StoreError),
}

impl From<StoreError> for ViewError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::AlreadyExists(symbol) => ViewError::Conflict(symbol),
            StoreError::BlankSymbol => ViewError::Validation(NO_SYMBOL),
            other => ViewError::Storage(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    Help,
}

/// Where the client should land, as parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Home,
    Dashboard { symbol: Option<String> },
}

impl Navigation {
    pub fn from_args(dashboard: bool, symbol: Option<String>) -> Self {
        if dashboard || symbol.is_some() {
            Navigation::Dashboard { symbol }
        } else {
            Navigation::Home
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub default_range: Range,
    pub notice_duration: TimeDelta,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_range: Range::OneMonth,
            notice_duration: TimeDelta::seconds(5),
        }
    }
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Self {
            default_range: config.default_range,
            notice_duration: TimeDelta::try_seconds(config.notice_secs.min(MAX_NOTICE_SECS) as i64)
                .unwrap_or(Settings::default().notice_duration),
        }
    }
}

pub struct App<P: DataProvider, S: Storage> {
    pub page: Page,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub selected_index: usize,
    /// Symbol the dashboard is showing.
    pub scope: Option<String>,
    pub quote: Option<QuoteRecord>,
    pub history: Option<HistoricalSeries>,
    /// Range of the rendered history.
    pub range: Range,
    pub loading: bool,
    pub last_updated: Option<String>,
    notice: Option<Notice>,
    history_generation: u64,
    settings: Settings,
    watchlist: WatchlistStore<S>,
    provider: P,
}

impl<P: DataProvider, S: Storage> App<P, S> {
    pub fn new(provider: P, watchlist: WatchlistStore<S>, settings: Settings) -> Self {
        Self {
            page: Page::Home,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            selected_index: 0,
            scope: None,
            quote: None,
            history: None,
            range: settings.default_range,
            loading: false,
            last_updated: None,
            notice: None,
            history_generation: 0,
            settings,
            watchlist,
            provider,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn watchlist(&self) -> &WatchlistStore<S> {
        &self.watchlist
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub async fn navigate(&mut self, to: Navigation) -> Result<(), ViewError> {
        match to {
            Navigation::Home => {
                self.go_home();
                Ok(())
            }
            Navigation::Dashboard { symbol } => self.open_dashboard(symbol.as_deref()).await,
        }
    }

    /// Leave the dashboard and show the watchlist.
    pub fn go_home(&mut self) {
        self.page = Page::Home;
        self.reset_scope();
        let len = self.watchlist.len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn close_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Currently visible notice, if it has not expired yet.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice_at(Utc::now())
    }

    pub fn notice_at(&self, now: DateTime<Utc>) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| n.is_visible(now))
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.show_notice_at(NoticeKind::Error, message, Utc::now());
    }

    pub fn show_success(&mut self, message: impl Into<String>) {
        self.show_notice_at(NoticeKind::Success, message, Utc::now());
    }

    /// Replace any current notice and restart the display timer from `now`.
    pub fn show_notice_at(&mut self, kind: NoticeKind, message: impl Into<String>, now: DateTime<Utc>) {
        let expires_at = now
            .checked_add_signed(self.settings.notice_duration)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.notice = Some(Notice::new(kind, message, expires_at));
    }

    /// Drop the notice once it has expired.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if self.notice.as_ref().is_some_and(|n| !n.is_visible(now)) {
            self.notice = None;
        }
    }

    /// Surface an error as a notice and hand it back to the caller.
    fn report<T>(&mut self, result: Result<T, ViewError>) -> Result<T, ViewError> {
        if let Err(e) = &result {
            match e {
                ViewError::Fetch { source, .. } => tracing::warn!("{e}: {source}"),
                ViewError::Storage(source) => tracing::error!("{e}: {source}"),
                _ => tracing::debug!("{e}"),
            }
            self.show_error(e.to_string());
        }
        result
    }

    fn reset_scope(&mut self) {
        self.scope = None;
        self.quote = None;
        self.history = None;
        self.range = self.settings.default_range;
        self.loading = false;
        // Anything still in flight belongs to the previous page.
        self.history_generation += 1;
    }
}
