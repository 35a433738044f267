use super::{App, EMPTY_SEARCH, InputMode, ViewError};
use crate::api::DataProvider;
use crate::store::{Storage, normalize_symbol};

impl<P: DataProvider, S: Storage> App<P, S> {
    pub fn start_search(&mut self) {
        self.input_mode = InputMode::Search;
        self.input_buffer.clear();
    }

    pub fn cancel_search(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    /// Navigate to the dashboard for the typed symbol. A blank query shows an
    /// error and leaves the current page as it is.
    pub async fn submit_search(&mut self) -> Result<(), ViewError> {
        self.input_mode = InputMode::Normal;
        let query = std::mem::take(&mut self.input_buffer);
        match normalize_symbol(&query) {
            Some(symbol) => self.open_dashboard(Some(&symbol)).await,
            None => self.report(Err(ViewError::Validation(EMPTY_SEARCH))),
        }
    }
}
