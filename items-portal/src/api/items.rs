use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

use crate::domain::services::item_service::ItemService;
use crate::server::AppState;
use crate::utils::pagination::PaginationParams;
use crate::views::urls;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(urls::API_ITEMS, get(list_items))
        .route(urls::API_ITEM, get(get_item))
}

/// 与上游保持一致，总数同时放在 x-total-count 响应头中
async fn list_items(
    State(state): State<Arc<AppState>>,
    pagination: Result<Query<PaginationParams>, QueryRejection>,
) -> Response {
    let pagination = pagination.map(|Query(p)| p).unwrap_or_default();
    let limit = pagination.limit_or(state.config.upstream.page_size);
    let result = ItemService::new(state).fetch_page(pagination.page(), limit).await;

    (
        [("x-total-count", result.total_count.to_string())],
        Json(result),
    )
        .into_response()
}

async fn get_item(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    match ItemService::new(state).get_item(&id).await {
        Some(item) => Json(item).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Item not found" })),
        )
            .into_response(),
    }
}
