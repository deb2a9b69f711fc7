use axum::{http::Uri, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api::{contact, items, pages};
use crate::config::Config;
use crate::domain::services::contact_service::Mailer;
use crate::domain::services::item_service::ItemSource;
use crate::error::AppError;
use crate::infrastructure::external::items_client::HttpItemSource;
use crate::infrastructure::mail::smtp::SmtpMailer;
use crate::views::urls;

/// 启动后只读，请求之间不共享可变状态
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub items: Arc<dyn ItemSource>,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let items = HttpItemSource::new(&config.upstream.base_url)?;
        let mailer = SmtpMailer::new(config.smtp.clone());

        Ok(Self {
            config,
            items: Arc::new(items),
            mailer: Arc::new(mailer),
        })
    }
}

pub fn create_app(state: AppState) -> Router {
    let app_state = Arc::new(state);

    // 健康检查路由
    let health_route = Router::new().route(urls::HEALTH, get(|| async { "OK" }));

    // JSON 接口允许跨域调用
    let api_routes = items::routes()
        .merge(contact::routes())
        .layer(CorsLayer::new().allow_origin(Any));

    Router::new()
        .merge(pages::routes())
        .merge(api_routes)
        .merge(health_route)
        .fallback(handler_404)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn handler_404(uri: Uri) -> AppError {
    AppError::NotFound(format!("page {}", uri.path()))
}
