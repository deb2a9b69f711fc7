use config::{builder::DefaultState, ConfigBuilder};
use serde::Deserialize;
use std::env;
use std::path::Path;

use crate::error::AppError;

/// SMTP 默认端口（STARTTLS）
pub const DEFAULT_SMTP_PORT: u16 = 587;
/// 该端口使用隐式 TLS
pub const IMPLICIT_TLS_PORT: u16 = 465;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub upstream: UpstreamConfig,
    pub smtp: SmtpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub page_size: u64,
    pub window_size: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    pub host: Option<String>,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
    /// 联系表单邮件的收件人
    pub receiver: Option<String>,
}

impl SmtpConfig {
    pub fn implicit_tls(&self) -> bool {
        self.port == IMPLICIT_TLS_PORT
    }
}

impl Config {
    /// 加载顺序：默认值 -> 配置文件 -> APP__ 环境变量 -> SMTP_* 环境变量
    pub fn load() -> Result<Self, AppError> {
        Self::load_with(|key| env::var(key).ok())
    }

    /// CONFIG_PATH 与 SMTP_* 变量从 `lookup` 读取，APP__ 前缀仍来自进程环境
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let config_path = lookup("CONFIG_PATH").unwrap_or_else(|| "config".to_string());

        let builder = Self::builder(Path::new(&config_path))?
            .set_override_option("smtp.host", lookup("SMTP_HOST"))?
            .set_override_option("smtp.port", smtp_port(&lookup).map(i64::from))?
            .set_override_option("smtp.user", lookup("SMTP_USER"))?
            .set_override_option("smtp.password", lookup("SMTP_PASS"))?
            .set_override_option("smtp.receiver", lookup("RECEIVER_EMAIL"))?;

        Self::from_builder(builder)
    }

    fn builder(config_path: &Path) -> Result<ConfigBuilder<DefaultState>, AppError> {
        let builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .set_default("upstream.base_url", "https://jsonplaceholder.typicode.com")?
            .set_default("upstream.page_size", 10_i64)?
            .set_default("upstream.window_size", 5_i64)?
            .set_default("smtp.port", i64::from(DEFAULT_SMTP_PORT))?
            .add_source(config::File::from(config_path.join("default")).required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        Ok(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, AppError> {
        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.upstream.page_size == 0 {
            return Err(AppError::InvalidConfig("upstream.page_size must be positive".to_string()));
        }
        if self.upstream.window_size == 0 {
            return Err(AppError::InvalidConfig("upstream.window_size must be positive".to_string()));
        }
        url::Url::parse(&self.upstream.base_url).map_err(|e| {
            AppError::InvalidConfig(format!("upstream.base_url {}: {}", self.upstream.base_url, e))
        })?;
        Ok(())
    }
}

/// 无法解析或为 0 时返回 None，回落到默认端口
fn smtp_port(lookup: impl Fn(&str) -> Option<String>) -> Option<u16> {
    lookup("SMTP_PORT")
        .and_then(|port| port.trim().parse::<u16>().ok())
        .filter(|port| *port != 0)
}
