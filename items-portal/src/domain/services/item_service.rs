use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::models::item::{Item, PageResult};
use crate::server::AppState;
use crate::utils::pagination::PaginationWindow;

/// 远端条目集合。实现方自行吞掉错误并记录日志，调用方无需分支处理。
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// 获取第 `page` 页（从 1 开始），失败时返回空列表和 0 总数
    async fn fetch_page(&self, page: u64, limit: u64) -> PageResult;

    /// 获取单条记录，上游非 2xx 或网络失败均返回 None
    async fn fetch_item(&self, id: &str) -> Option<Item>;
}

/// 列表页需要的全部数据
#[derive(Debug, Clone)]
pub struct ItemListing {
    pub page: PageResult,
    pub window: PaginationWindow,
}

pub struct ItemService {
    state: Arc<AppState>,
}

impl ItemService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    pub async fn list_items(&self, page: u64) -> ItemListing {
        let upstream = &self.state.config.upstream;

        // 先取数据，再根据总数计算分页窗口
        let result = self.state.items.fetch_page(page, upstream.page_size).await;
        let window = PaginationWindow::for_items(
            page,
            result.total_count,
            upstream.page_size,
            upstream.window_size,
        );

        ItemListing { page: result, window }
    }

    pub async fn fetch_page(&self, page: u64, limit: u64) -> PageResult {
        self.state.items.fetch_page(page, limit).await
    }

    pub async fn get_item(&self, id: &str) -> Option<Item> {
        tracing::debug!("Fetching item with ID: {}", id);
        self.state.items.fetch_item(id).await
    }
}
