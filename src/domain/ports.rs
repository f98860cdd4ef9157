use crate::domain::model::{ProductStatus, StockReport};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait PageFetcher: Send + Sync {
    /// Fetches `url` and returns the decoded body text.
    fn fetch(&self, url: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn target_url(&self) -> &str;
    /// Keyword regex used for windowed extraction; also the report label.
    fn keyword(&self) -> &str;
    fn timeout_secs(&self) -> u64;
    fn window(&self) -> usize;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<String>;
    async fn transform(&self, html: String) -> Result<Vec<ProductStatus>>;
    async fn load(&self, statuses: Vec<ProductStatus>) -> Result<StockReport>;
}
