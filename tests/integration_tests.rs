use httpmock::prelude::*;
use stock_probe::adapters::http::USER_AGENT;
use stock_probe::app::runner::run_check;
use stock_probe::core::report::OutputFormat;
use stock_probe::{CheckConfig, CheckEngine, DetailedPipeline, HttpFetcher, Outcome};

fn config_for(url: String) -> CheckConfig {
    CheckConfig {
        url,
        keyword: "X100VI".to_string(),
        timeout: 5,
        window: 180,
        format: OutputFormat::Text,
        verbose: false,
    }
}

async fn run_against(url: String) -> (u8, String, String) {
    let config = config_for(url);
    let fetcher = HttpFetcher::new(config.timeout).unwrap();
    let engine = CheckEngine::new(DetailedPipeline::new(fetcher, config).unwrap());

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run_check(&engine, OutputFormat::Text, &mut out, &mut err).await;

    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[tokio::test]
async fn test_in_stock_page_exits_zero() {
    let server = MockServer::start();
    let html = r#"<html><body>
        <div class="item"><p class="name">FUJIFILM X100VI シルバー</p><p class="stock">在庫あり</p></div>
    </body></html>"#;

    let page_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("keyword", "X100VI")
            .header("user-agent", USER_AGENT);
        then.status(200)
            .header("Content-Type", "text/html; charset=utf-8")
            .body(html);
    });

    let (code, out, err) = run_against(server.url("/search?keyword=X100VI")).await;

    page_mock.assert();
    assert_eq!(code, 0);
    assert!(err.is_empty());
    assert!(out.starts_with("=== MapCamera stock check (X100VI) ===\n"));
    assert!(out.contains("[1] likely in stock: FUJIFILM X100VI シルバー 在庫あり"));
    assert!(out.contains("Result: in-stock notation detected."));
}

#[tokio::test]
async fn test_backorder_only_page_exits_one() {
    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200)
            .header("Content-Type", "text/html")
            .body("<li>FUJIFILM X100VI ブラック 入荷待ち</li>");
    });

    let (code, out, _) = run_against(server.url("/search")).await;

    page_mock.assert();
    assert_eq!(code, 1);
    assert!(out.contains("[1] out of stock or needs confirmation: FUJIFILM X100VI ブラック 入荷待ち"));
    assert!(out.contains("Result: no in-stock notation detected."));
}

#[tokio::test]
async fn test_page_without_product_exits_two() {
    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200)
            .header("Content-Type", "text/html")
            .body("<li>FUJIFILM X-T5 在庫あり</li><script>var q = 'X100VI';</script>");
    });

    let (code, out, _) = run_against(server.url("/search")).await;

    page_mock.assert();
    assert_eq!(code, 2);
    assert_eq!(
        out,
        "No product information containing X100VI was found. Check the URL or page structure.\n"
    );
}

#[tokio::test]
async fn test_json_ld_english_availability_is_undetermined() {
    let server = MockServer::start();
    let html = r#"<html><head>
        <script type="application/ld+json">{"@type":"Product","name":"FUJIFILM X100VI","availability":"InStock"}</script>
    </head><body><div id="app"></div></body></html>"#;

    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200).header("Content-Type", "text/html").body(html);
    });

    let (code, out, _) = run_against(server.url("/search")).await;

    page_mock.assert();
    assert_eq!(code, 1);
    assert!(out.contains("[1] undetermined: FUJIFILM X100VI InStock"));
}

#[tokio::test]
async fn test_http_404_exits_three() {
    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/missing");
        then.status(404);
    });

    let (code, out, err) = run_against(server.url("/missing")).await;

    page_mock.assert();
    assert_eq!(code, 3);
    assert!(out.is_empty());
    assert!(err.contains("HTTP error: 404 Not Found"));
}

#[tokio::test]
async fn test_nonstandard_status_exits_three() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/odd");
        then.status(599);
    });

    let (code, _, err) = run_against(server.url("/odd")).await;

    assert_eq!(code, 3);
    assert!(err.starts_with("HTTP error: 599\n"));
}

#[tokio::test]
async fn test_connection_failure_exits_three() {
    // Nothing listens on port 1.
    let (code, out, err) = run_against("http://127.0.0.1:1/search".to_string()).await;

    assert_eq!(code, 3);
    assert!(out.is_empty());
    assert!(err.starts_with("URL error: "));
}

#[tokio::test]
async fn test_declared_charset_is_used_for_decoding() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/latin1");
        then.status(200)
            .header("Content-Type", "text/html; charset=iso-8859-1")
            .body(b"<p>X100VI Caf\xe9</p>".to_vec());
    });

    let fetcher = HttpFetcher::new(5).unwrap();
    let body = stock_probe::core::PageFetcher::fetch(&fetcher, &server.url("/latin1"))
        .await
        .unwrap();

    assert_eq!(body, "<p>X100VI Café</p>");
}

#[tokio::test]
async fn test_undecodable_bytes_are_replaced() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/broken");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(b"<p>X100VI \xff</p>".to_vec());
    });

    let fetcher = HttpFetcher::new(5).unwrap();
    let body = stock_probe::core::PageFetcher::fetch(&fetcher, &server.url("/broken"))
        .await
        .unwrap();

    assert_eq!(body, "<p>X100VI \u{fffd}</p>");
}

#[tokio::test]
async fn test_json_output_format() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200)
            .header("Content-Type", "text/html")
            .body("<p>X100VI 即納</p>");
    });

    let config = config_for(server.url("/search"));
    let engine = CheckEngine::new(DetailedPipeline::new(HttpFetcher::new(5).unwrap(), config).unwrap());

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run_check(&engine, OutputFormat::Json, &mut out, &mut err).await;

    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["outcome"], "in_stock");
    assert_eq!(value["statuses"][0]["snippet"], "X100VI 即納");
}

#[tokio::test]
async fn test_engine_returns_report() -> anyhow::Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200)
            .header("Content-Type", "text/html")
            .body("<p>X100VI 在庫なし</p><p>X100VI お取り寄せ</p>");
    });

    let config = config_for(server.url("/search"));
    let engine = CheckEngine::new(DetailedPipeline::new(HttpFetcher::new(5)?, config)?);
    let report = engine.run().await?;

    assert_eq!(report.outcome, Outcome::NoneInStock);
    assert_eq!(report.statuses.len(), 1);
    Ok(())
}
