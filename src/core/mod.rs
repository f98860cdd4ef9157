pub mod classify;
pub mod engine;
pub mod extract;
pub mod normalize;
pub mod report;

pub use crate::domain::model::{Outcome, ProductStatus, StockReport};
pub use crate::domain::ports::{ConfigProvider, PageFetcher, Pipeline};
pub use crate::utils::error::Result;
