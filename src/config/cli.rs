use super::{DEFAULT_KEYWORD, DEFAULT_TIMEOUT_SECS, DEFAULT_URL, DEFAULT_WINDOW};
use crate::core::report::OutputFormat;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_pattern, validate_positive_number, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "stock-probe")]
#[command(about = "Check whether FUJIFILM X100VI is in stock at MapCamera")]
pub struct CheckConfig {
    /// Page to check
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Product keyword (regular expression, case-insensitive)
    #[arg(long, default_value = DEFAULT_KEYWORD)]
    pub keyword: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Characters captured before and after each keyword match
    #[arg(long, default_value_t = DEFAULT_WINDOW)]
    pub window: usize,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CheckConfig {
    fn target_url(&self) -> &str {
        &self.url
    }

    fn keyword(&self) -> &str {
        &self.keyword
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout
    }

    fn window(&self) -> usize {
        self.window
    }
}

impl Validate for CheckConfig {
    fn validate(&self) -> Result<()> {
        validate_url("url", &self.url)?;
        validate_pattern("keyword", &self.keyword)?;
        validate_positive_number("timeout", self.timeout, 1)?;
        Ok(())
    }
}
