use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;

use super::ServerState;
use super::error::ApiError;
use crate::api::{HistoricalSeries, QuoteRecord, Range};

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    range: Option<String>,
}

pub fn api_router() -> Router<Arc<ServerState>> {
    Router::new()
        .route("/api/stock/{symbol}", get(api_stock))
        .route("/api/historical/{symbol}", get(api_historical))
}

async fn api_stock(
    State(state): State<Arc<ServerState>>,
    Path(symbol): Path<String>,
) -> Result<Json<QuoteRecord>, ApiError> {
    let quote = state.provider.quote(&symbol)?;
    Ok(Json(quote))
}

/// Missing or unrecognized `range` falls back to the one-year bucket.
async fn api_historical(
    State(state): State<Arc<ServerState>>,
    Path(symbol): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoricalSeries>, ApiError> {
    let range = Range::from_query(query.range.as_deref());
    tracing::debug!(%symbol, %range, "historical request");
    let series = state.provider.history(range)?;
    Ok(Json(series))
}
