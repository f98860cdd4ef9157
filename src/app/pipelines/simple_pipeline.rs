use crate::core::classify::classify;
use crate::core::extract::split_product_fields;
use crate::core::normalize::{dedup_candidates, split_blocks, strip_scripts_and_styles};
use crate::core::{ConfigProvider, PageFetcher, Pipeline, ProductStatus, StockReport};
use crate::utils::error::Result;

/// Field-splitting only: no keyword windows, no structured data.
pub struct SimplePipeline<F: PageFetcher, C: ConfigProvider> {
    pub(crate) fetcher: F,
    pub(crate) config: C,
}

impl<F: PageFetcher, C: ConfigProvider> SimplePipeline<F, C> {
    pub fn new(fetcher: F, config: C) -> Self {
        Self { fetcher, config }
    }

    pub fn build_statuses(&self, html: &str) -> Vec<ProductStatus> {
        let blocks = split_blocks(&strip_scripts_and_styles(html));
        tracing::debug!("Split page into {} text blocks", blocks.len());

        let fields: Vec<String> = blocks
            .iter()
            .flat_map(|block| split_product_fields(block))
            .collect();
        tracing::debug!("Found {} product fields", fields.len());

        dedup_candidates(fields).iter().map(|line| classify(line)).collect()
    }
}

#[async_trait::async_trait]
impl<F: PageFetcher, C: ConfigProvider> Pipeline for SimplePipeline<F, C> {
    async fn extract(&self) -> Result<String> {
        self.fetcher.fetch(self.config.target_url()).await
    }

    async fn transform(&self, html: String) -> Result<Vec<ProductStatus>> {
        Ok(self.build_statuses(&html))
    }

    async fn load(&self, statuses: Vec<ProductStatus>) -> Result<StockReport> {
        Ok(StockReport::new(
            self.config.keyword().to_string(),
            self.config.target_url().to_string(),
            statuses,
        ))
    }
}
