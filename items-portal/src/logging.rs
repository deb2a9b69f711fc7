use crate::config::LoggingConfig;
use crate::error::AppError;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// 配置中的级别无法解析时使用
const FALLBACK_LEVEL: &str = "info";

/// RUST_LOG 优先于配置文件中的日志级别。
///
/// `logging.format = "json"` 输出 JSON 行，其余取值使用 pretty 格式。
pub fn init_logging(config: &LoggingConfig) -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| config_filter(&config.level));

    let formatting_layer = match config.format.as_str() {
        "json" => fmt::layer().json().boxed(),
        _ => fmt::layer().pretty().boxed(),
    };

    registry()
        .with(env_filter)
        .with(formatting_layer)
        .try_init()
        .map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!(level = %config.level, format = %config.format, "logging initialized");
    Ok(())
}

/// 写错的 `logging.level` 不应阻止服务启动
fn config_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|e| {
        eprintln!("invalid logging.level {:?} ({}), using {}", level, e, FALLBACK_LEVEL);
        EnvFilter::new(FALLBACK_LEVEL)
    })
}
