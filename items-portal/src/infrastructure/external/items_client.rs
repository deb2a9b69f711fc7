use async_trait::async_trait;
use reqwest::header::{HeaderMap, CACHE_CONTROL};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use crate::domain::models::item::{Item, PageResult};
use crate::domain::services::item_service::ItemSource;
use crate::error::AppError;
use crate::utils::pagination::Paginated;

const TOTAL_COUNT_HEADER: &str = "x-total-count";

#[derive(Error, Debug)]
enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(StatusCode),

    #[error("base url cannot have path segments: {0}")]
    BaseUrl(Url),
}

/// 通过 HTTP 访问 `{base_url}/posts` 集合
#[derive(Clone)]
pub struct HttpItemSource {
    client: Client,
    base_url: Url,
}

impl HttpItemSource {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::InvalidConfig(format!("upstream.base_url {}: {}", base_url, e)))?;
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// `id` 作为单独的路径段追加，会被百分号编码
    fn posts_url(&self, id: Option<&str>) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| FetchError::BaseUrl(self.base_url.clone()))?;
            segments.pop_if_empty().push("posts");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    async fn try_fetch_page(&self, page: u64, limit: u64) -> Result<PageResult, FetchError> {
        let url = self.posts_url(None)?;
        let response = self
            .client
            .get(url)
            .query(&[("_page", page), ("_limit", limit)])
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let total_count = total_count(response.headers());
        let items = response.json::<Vec<Item>>().await?;

        Ok(Paginated { items, total_count })
    }

    async fn try_fetch_item(&self, id: &str) -> Result<Item, FetchError> {
        let url = self.posts_url(Some(id))?;
        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        Ok(response.json::<Item>().await?)
    }
}

#[async_trait]
impl ItemSource for HttpItemSource {
    async fn fetch_page(&self, page: u64, limit: u64) -> PageResult {
        match self.try_fetch_page(page, limit).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Failed to fetch items page {} (limit {}): {}", page, limit, e);
                Paginated::empty()
            }
        }
    }

    async fn fetch_item(&self, id: &str) -> Option<Item> {
        match self.try_fetch_item(id).await {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!("Failed to fetch item {}: {}", id, e);
                None
            }
        }
    }
}

/// 缺失或无法解析时为 0
fn total_count(headers: &HeaderMap) -> u64 {
    headers
        .get(TOTAL_COUNT_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_total_count_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(total_count(&headers), 0);

        headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from_static("100"));
        assert_eq!(total_count(&headers), 100);

        headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from_static("lots"));
        assert_eq!(total_count(&headers), 0);

        headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from_static("-4"));
        assert_eq!(total_count(&headers), 0);
    }

    #[test]
    fn test_posts_url() {
        let source = HttpItemSource::new("https://example.com").unwrap();
        assert_eq!(source.posts_url(None).unwrap().as_str(), "https://example.com/posts");
        assert_eq!(
            source.posts_url(Some("42")).unwrap().as_str(),
            "https://example.com/posts/42"
        );

        let nested = HttpItemSource::new("https://example.com/api/").unwrap();
        assert_eq!(nested.posts_url(None).unwrap().as_str(), "https://example.com/api/posts");
    }

    #[test]
    fn test_item_id_is_a_single_segment() {
        let source = HttpItemSource::new("https://example.com").unwrap();
        let url = source.posts_url(Some("1/../admin")).unwrap();
        assert_eq!(url.as_str(), "https://example.com/posts/1%2F..%2Fadmin");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpItemSource::new("not a url"),
            Err(AppError::InvalidConfig(_))
        ));
    }
}
