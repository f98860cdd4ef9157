use crate::core::Pipeline;
use crate::domain::model::StockReport;
use crate::utils::error::Result;

pub struct CheckEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CheckEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<StockReport> {
        tracing::info!("🚀 Starting stock check");

        tracing::info!("🌐 Fetching page...");
        let html = self.pipeline.extract().await?;
        tracing::info!("Fetched {} characters", html.chars().count());

        tracing::info!("🔍 Scanning for candidates...");
        let statuses = self.pipeline.transform(html).await?;
        tracing::info!("Classified {} candidates", statuses.len());

        let report = self.pipeline.load(statuses).await?;
        tracing::info!("✅ Stock check finished: {:?}", report.outcome);

        Ok(report)
    }
}
