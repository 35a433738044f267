use super::{DataProvider, FetchError, HistoricalSeries, QuoteRecord, Range};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

/// Data provider backed by the `stockwatch serve` API.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: Client,
    base_url: Url,
}

impl HttpProvider {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url).map_err(|e| FetchError::Url(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::Url(format!("{} cannot be a base url", base_url)));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// `<base>/api/<resource>/<symbol>` with the symbol percent-encoded as a
    /// single path segment.
    fn endpoint(&self, resource: &str, symbol: &str) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Url(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["api", resource, symbol]);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response.json().await?)
    }
}

impl DataProvider for HttpProvider {
    async fn fetch_quote(&self, symbol: &str) -> Result<QuoteRecord, FetchError> {
        let url = self.endpoint("stock", symbol)?;
        self.get_json(url, &[]).await
    }

    async fn fetch_history(&self, symbol: &str, range: Range) -> Result<HistoricalSeries, FetchError> {
        let url = self.endpoint("historical", symbol)?;
        self.get_json(url, &[("range", range.as_str())]).await
    }
}
