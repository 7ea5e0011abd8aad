pub mod model;

use crate::AppState;
use crate::display::{ContentArea, MemoryContentArea};
use crate::routing::{HashRouter, Location, NavLinks, Route};
use crate::services::search::SearchResult;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use model::{JsonPage, SearchParams};
use std::sync::Arc;

pub fn site_router() -> Router<AppState> {
    Router::new()
        .route("/routes", get(list_routes_handler))
        .route("/pages", get(get_home_handler))
        .route("/pages/{key}", get(get_page_handler))
        .route("/search", get(search_handler))
}

async fn list_routes_handler(State(state): State<AppState>) -> Json<Vec<Route>> {
    Json(state.routes.routes().to_vec())
}

async fn get_home_handler(State(state): State<AppState>) -> (StatusCode, Json<JsonPage>) {
    render_fragment(&state, "").await
}

async fn get_page_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> (StatusCode, Json<JsonPage>) {
    render_fragment(&state, &key).await
}

// every request gets its own router session over the shared loader and its cache
async fn render_fragment(state: &AppState, fragment: &str) -> (StatusCode, Json<JsonPage>) {
    let area = Arc::new(MemoryContentArea::new());
    let router = HashRouter::new(
        state.routes.clone(),
        state.loader.clone(),
        area.clone(),
        Location::new(fragment),
        NavLinks::from_route_table(&state.routes),
        state.config.messages.not_found.clone(),
    );

    let outcome = router.start().await;
    let page = JsonPage::from_outcome(outcome, router.nav().active_key(), area.html());

    let status = if page.found {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    (status, Json(page))
}

async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<SearchResult>> {
    let query = params.q.unwrap_or_default();
    if !state.search.is_ready() {
        tracing::debug!("Search: query '{}' arrived before the index finished building", query);
    }
    Json(state.search.search(&query).await)
}
