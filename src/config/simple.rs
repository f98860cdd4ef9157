use super::{DEFAULT_KEYWORD, DEFAULT_TIMEOUT_SECS, DEFAULT_URL, DEFAULT_WINDOW};
use crate::core::report::OutputFormat;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::Parser;

/// Arguments of the field-splitting checker. Keyword and window are fixed.
#[derive(Debug, Clone, Parser)]
#[command(name = "stock-probe-simple")]
#[command(about = "Check X100VI stock at MapCamera by scanning page text fields")]
pub struct SimpleCheckConfig {
    /// Page to check
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for SimpleCheckConfig {
    fn target_url(&self) -> &str {
        &self.url
    }

    fn keyword(&self) -> &str {
        DEFAULT_KEYWORD
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout
    }

    fn window(&self) -> usize {
        DEFAULT_WINDOW
    }
}

impl Validate for SimpleCheckConfig {
    fn validate(&self) -> Result<()> {
        validate_url("url", &self.url)?;
        validate_positive_number("timeout", self.timeout, 1)?;
        Ok(())
    }
}
