use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Json, Router,
};
use chrono::{Local, NaiveDate};
use daytrip_core::{SearchParams, SearchQuery, TripOption};
use serde::Serialize;

use crate::render;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub ok: bool,
    pub params: SearchParams,
    pub flights: Vec<TripOption>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/search", get(search_page))
        .route("/api/search", get(api_search))
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// GET /search
/// Unchecked form checkboxes are simply absent, so missing toggles read as off.
pub async fn search_page(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Html<String> {
    let params = query.into_params(today(), false);
    let flights = state.search.search(&params);
    Html(render::results_page(&state.brand, &params, &flights))
}

/// GET /api/search
/// Both time-window filters default to on.
pub async fn api_search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let params = query.into_params(today(), true);
    let flights = state.search.search(&params);
    tracing::debug!("API search {}-{} -> {} flight(s)", params.origin, params.destination, flights.len());
    Json(SearchResponse { ok: true, params, flights })
}
