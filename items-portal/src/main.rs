use items_portal::config::Config;
use items_portal::error::AppError;
use items_portal::logging::init_logging;
use items_portal::server::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 加载 .env
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    init_logging(&config.logging)?;

    tracing::info!("Starting items portal, upstream {}", config.upstream.base_url);
    if config.smtp.host.is_none() || config.smtp.receiver.is_none() {
        tracing::warn!("SMTP is not fully configured, contact messages will fail to send");
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = create_app(AppState::new(config)?);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", &addr);

    axum::serve(listener, app).await?;
    Ok(())
}
