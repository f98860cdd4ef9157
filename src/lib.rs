pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CheckConfig, SimpleCheckConfig};

pub use adapters::HttpFetcher;
pub use app::pipelines::{DetailedPipeline, SimplePipeline};
pub use core::engine::CheckEngine;
pub use domain::model::{Outcome, ProductStatus, StockReport};
pub use utils::error::{CheckError, Result};
