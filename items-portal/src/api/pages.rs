use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Router,
};
use maud::Markup;
use std::sync::Arc;

use crate::domain::services::item_service::ItemService;
use crate::error::AppError;
use crate::server::AppState;
use crate::utils::pagination::PaginationParams;
use crate::views::{self, urls};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(urls::HOME, get(index))
        .route(urls::ITEMS, get(list_items))
        .route(urls::ITEM_DETAIL, get(item_detail))
}

async fn index() -> Markup {
    views::home::index()
}

async fn list_items(
    State(state): State<Arc<AppState>>,
    pagination: Result<Query<PaginationParams>, QueryRejection>,
) -> Markup {
    // 重复的 page 参数等无法解析的查询串同样回落到第一页
    let pagination = pagination.map(|Query(p)| p).unwrap_or_default();
    let listing = ItemService::new(state).list_items(pagination.page()).await;
    views::items::list(&listing)
}

async fn item_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Markup, AppError> {
    let item = ItemService::new(state)
        .get_item(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("item with ID {}", id)))?;

    Ok(views::items::detail(&item))
}
