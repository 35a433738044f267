mod storage;

pub use storage::{FileStorage, MemoryStorage, Storage};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key holding the serialized watchlist.
pub const WATCHLIST_KEY: &str = "watchlist";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} is already in the watchlist")]
    AlreadyExists(String),
    #[error("watchlist entries need a symbol")]
    BlankSymbol,
    #[error("failed to persist watchlist: {0}")]
    Persist(#[from] std::io::Error),
    #[error("failed to encode watchlist: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Trim and upper-case a user-supplied symbol. Returns `None` when nothing is left.
pub fn normalize_symbol(raw: &str) -> Option<String> {
    let symbol = raw.trim().to_uppercase();
    if symbol.is_empty() { None } else { Some(symbol) }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub symbol: String,
    pub name: String,
}

impl WatchlistEntry {
    /// Builds an entry with a normalized symbol, or `None` if the symbol is blank.
    pub fn new(symbol: &str, name: &str) -> Option<Self> {
        Some(Self {
            symbol: normalize_symbol(symbol)?,
            name: name.to_string(),
        })
    }
}

/// Ordered, symbol-unique watchlist that rewrites its backing storage on
/// every mutation.
#[derive(Debug)]
pub struct WatchlistStore<S: Storage> {
    storage: S,
    entries: Vec<WatchlistEntry>,
}

impl<S: Storage> WatchlistStore<S> {
    /// Load persisted entries. Missing, unreadable or corrupt state yields an
    /// empty list; it is never an error. Symbols are normalized on the way in
    /// and entries without one are dropped.
    pub fn load(storage: S) -> Self {
        let entries = match storage.read(WATCHLIST_KEY) {
            Ok(Some(content)) => match serde_json::from_str::<Vec<WatchlistEntry>>(&content) {
                Ok(entries) => dedup_entries(entries),
                Err(e) => {
                    tracing::warn!("ignoring corrupt watchlist state: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("could not read watchlist state: {e}");
                Vec::new()
            }
        };
        tracing::debug!(count = entries.len(), "watchlist loaded");
        Self { storage, entries }
    }

    pub fn list(&self) -> &[WatchlistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.iter().any(|e| e.symbol == symbol)
    }

    /// Append `entry` unless its symbol is already present.
    ///
    /// If persisting fails the append is undone, so the in-memory list always
    /// matches the last successful write.
    pub fn add(&mut self, mut entry: WatchlistEntry) -> Result<(), StoreError> {
        entry.symbol = normalize_symbol(&entry.symbol).ok_or(StoreError::BlankSymbol)?;
        if self.contains(&entry.symbol) {
            return Err(StoreError::AlreadyExists(entry.symbol));
        }
        let symbol = entry.symbol.clone();
        self.entries.push(entry);
        if let Err(e) = self.persist() {
            self.entries.pop();
            return Err(e);
        }
        tracing::info!(%symbol, "added to watchlist");
        Ok(())
    }

    /// Remove every entry for `symbol`. Absent symbols are not an error.
    pub fn remove(&mut self, symbol: &str) -> Result<(), StoreError> {
        let Some(symbol) = normalize_symbol(symbol) else {
            return Ok(());
        };
        let before = self.entries.clone();
        self.entries.retain(|e| e.symbol != symbol);
        if let Err(e) = self.persist() {
            self.entries = before;
            return Err(e);
        }
        tracing::info!(%symbol, "removed from watchlist");
        Ok(())
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        self.storage.write(WATCHLIST_KEY, &content)?;
        Ok(())
    }
}

fn dedup_entries(entries: Vec<WatchlistEntry>) -> Vec<WatchlistEntry> {
    let mut out: Vec<WatchlistEntry> = Vec::with_capacity(entries.len());
    for mut entry in entries {
        let Some(symbol) = normalize_symbol(&entry.symbol) else {
            tracing::warn!(name = %entry.name, "dropping watchlist entry without a symbol");
            continue;
        };
        entry.symbol = symbol;
        if !out.iter().any(|e| e.symbol == entry.symbol) {
            out.push(entry);
        }
    }
    out
}
