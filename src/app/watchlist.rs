use super::{ADDED_TO_WATCHLIST, App, ViewError};
use crate::api::DataProvider;
use crate::store::{Storage, WatchlistEntry};

impl<P: DataProvider, S: Storage> App<P, S> {
    /// Add the symbol in scope, under its rendered name, to the watchlist.
    /// Does nothing when no symbol is in scope.
    pub fn add_to_watchlist(&mut self) -> Result<(), ViewError> {
        let (Some(symbol), Some(name)) = (self.scope.clone(), self.display_name()) else {
            return Ok(());
        };
        let result = self
            .watchlist
            .add(WatchlistEntry { symbol, name })
            .map_err(ViewError::from);
        self.report(result)?;
        self.show_success(ADDED_TO_WATCHLIST);
        Ok(())
    }

    pub fn remove_from_watchlist(&mut self, symbol: &str) -> Result<(), ViewError> {
        let result = self.watchlist.remove(symbol).map_err(ViewError::from);
        self.report(result)?;
        let len = self.watchlist.len();
        if self.selected_index >= len && self.selected_index > 0 {
            self.selected_index = len.saturating_sub(1);
        }
        Ok(())
    }

    pub fn remove_selected(&mut self) -> Result<(), ViewError> {
        match self.selected_symbol() {
            Some(symbol) => self.remove_from_watchlist(&symbol),
            None => Ok(()),
        }
    }

    /// Open the dashboard for the highlighted watchlist entry.
    pub async fn view_selected(&mut self) -> Result<(), ViewError> {
        match self.selected_symbol() {
            Some(symbol) => self.open_dashboard(Some(&symbol)).await,
            None => Ok(()),
        }
    }

    pub fn selected_symbol(&self) -> Option<String> {
        self.watchlist
            .list()
            .get(self.selected_index)
            .map(|e| e.symbol.clone())
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        let len = self.watchlist.len();
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }
}
