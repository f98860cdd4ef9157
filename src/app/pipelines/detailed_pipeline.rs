use crate::core::classify::classify;
use crate::core::extract::{compile_keyword, extract_json_product_candidates, find_keyword_contexts};
use crate::core::normalize::{dedup_candidates, normalize_text, strip_scripts_and_styles};
use crate::core::{ConfigProvider, PageFetcher, Pipeline, ProductStatus, StockReport};
use crate::utils::error::Result;
use regex::Regex;

/// Windowed keyword extraction plus JSON-LD structured data.
pub struct DetailedPipeline<F: PageFetcher, C: ConfigProvider> {
    pub(crate) fetcher: F,
    pub(crate) config: C,
    keyword: Regex,
}

impl<F: PageFetcher, C: ConfigProvider> DetailedPipeline<F, C> {
    pub fn new(fetcher: F, config: C) -> Result<Self> {
        let keyword = compile_keyword(config.keyword())?;
        Ok(Self {
            fetcher,
            config,
            keyword,
        })
    }

    pub fn build_statuses(&self, html: &str) -> Vec<ProductStatus> {
        let plain_text = normalize_text(&strip_scripts_and_styles(html));

        let mut contexts = find_keyword_contexts(&plain_text, &self.keyword, self.config.window());
        tracing::debug!("Found {} keyword windows", contexts.len());

        // JSON-LD lives inside <script>, so it is mined from the raw markup.
        let structured = extract_json_product_candidates(html);
        tracing::debug!("Found {} structured-data candidates", structured.len());
        contexts.extend(structured);

        dedup_candidates(contexts)
            .iter()
            .map(|snippet| {
                let status = classify(snippet);
                tracing::debug!("{:?} <- {}", status.in_stock, status.title);
                status
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl<F: PageFetcher, C: ConfigProvider> Pipeline for DetailedPipeline<F, C> {
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
