use std::process::ExitCode;

use clap::Parser;
use stock_probe::app::runner::{report_error, run_check};
use stock_probe::core::ConfigProvider;
use stock_probe::utils::{logger, validation::Validate};
use stock_probe::{CheckConfig, CheckEngine, DetailedPipeline, HttpFetcher};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = CheckConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting stock-probe");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        return ExitCode::from(report_error(&e, &mut std::io::stderr()));
    }

    let format = config.format;
    let fetcher = match HttpFetcher::new(config.timeout_secs()) {
        Ok(fetcher) => fetcher,
        Err(e) => return ExitCode::from(report_error(&e, &mut std::io::stderr())),
    };
    let pipeline = match DetailedPipeline::new(fetcher, config) {
        Ok(pipeline) => pipeline,
        Err(e) => return ExitCode::from(report_error(&e, &mut std::io::stderr())),
    };

    let engine = CheckEngine::new(pipeline);
    let code = run_check(
        &engine,
        format,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr(),
    )
    .await;

    ExitCode::from(code)
}
