pub mod detailed_pipeline;
pub mod simple_pipeline;

pub use detailed_pipeline::DetailedPipeline;
pub use simple_pipeline::SimplePipeline;
