use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use tempfile::tempdir;
use tee_forecast::config::Config;
use tee_forecast::error::AppError;
use tee_forecast::forecast_page::ForecastPage;
use tee_forecast::tee_times::http_client::create_http_client_with_timeout;
use tee_forecast::tee_times::{fetch_tee_times, resolve};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(source_url: String, output_dir: &Path) -> Config {
    Config {
        source_url,
        output_dir: output_dir.to_string_lossy().to_string(),
        pages_url: None,
        ..Config::default()
    }
}

/// The same fetch -> resolve -> render -> write sequence the binary runs.
/// Writing happens last, so a failed run must leave the output directory
/// untouched.
async fn build_site(config: &Config, now: DateTime<Utc>) -> Result<PathBuf, AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let doc = fetch_tee_times(&client, &config.source_url).await?;
    let target = resolve(&doc, now)?;
    let page = ForecastPage::new(&target, config);
    page.write_to_dir(Path::new(&config.output_dir), config.pages_url.as_deref())
        .await
}

async fn mock_source(body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/iggolf.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;
    server
}

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
}

#[tokio::test]
async fn test_full_build_targets_future_next_tee() {
    let body = r#"{
        "nextTee": {
            "whenISO": "2024-03-12T09:10:00Z",
            "dateISO": "2024-03-12",
            "timeHHMM": "10:10"
        },
        "todayTee": {"whenISO": "2024-03-10T06:30:00Z"}
    }"#;
    let server = mock_source(body).await;
    let out = tempdir().unwrap();
    let site_dir = out.path().join("site");
    let config = test_config(format!("{}/iggolf.json", server.uri()), &site_dir);

    let written = build_site(&config, fixed_now()).await.unwrap();

    assert_eq!(written, site_dir.join("index.html"));
    let html = tokio::fs::read_to_string(&written).await.unwrap();
    assert!(html.contains("t=20240312/09"));
    assert!(html.contains("p=51.73;-1.037;10"));
    assert!(html.contains("l=rain-3h"));
    // Banner shows the display hints, target stays UTC
    assert!(html.contains("2024-03-12 10:10"));
}

#[tokio::test]
async fn test_full_build_accepts_stale_next_tee() {
    let body = r#"{"nextTee": {"whenISO": "2024-03-01T08:00:00Z"}}"#;
    let server = mock_source(body).await;
    let out = tempdir().unwrap();
    let site_dir = out.path().join("site");
    let config = test_config(format!("{}/iggolf.json", server.uri()), &site_dir);

    let written = build_site(&config, fixed_now()).await.unwrap();

    let html = tokio::fs::read_to_string(&written).await.unwrap();
    assert!(html.contains("t=20240301/08"));
}

#[tokio::test]
async fn test_full_build_writes_tap_helper() {
    let body = r#"{"todayTee": {"whenISO": "2024-03-10T06:30:00Z"}}"#;
    let server = mock_source(body).await;
    let out = tempdir().unwrap();
    let site_dir = out.path().join("site");
    let mut config = test_config(format!("{}/iggolf.json", server.uri()), &site_dir);
    config.pages_url = Some("https://example.github.io/tee-forecast/".to_string());

    build_site(&config, fixed_now()).await.unwrap();

    let tap = tokio::fs::read_to_string(site_dir.join("tap.txt"))
        .await
        .unwrap();
    assert_eq!(tap, "https://example.github.io/tee-forecast/\n");
}

#[tokio::test]
async fn test_unusable_document_writes_nothing() {
    let server = mock_source(r#"{"nextTee": {"dateISO": "2024-03-12"}}"#).await;
    let out = tempdir().unwrap();
    let site_dir = out.path().join("site");
    let config = test_config(format!("{}/iggolf.json", server.uri()), &site_dir);

    let result = build_site(&config, fixed_now()).await;

    assert!(matches!(result, Err(AppError::NoUsableTeeTime)));
    assert!(!site_dir.exists());
}

#[tokio::test]
async fn test_invalid_timestamp_writes_nothing() {
    let server = mock_source(r#"{"nextTee": {"whenISO": "not-a-date"}}"#).await;
    let out = tempdir().unwrap();
    let site_dir = out.path().join("site");
    let config = test_config(format!("{}/iggolf.json", server.uri()), &site_dir);

    let result = build_site(&config, fixed_now()).await;

    assert!(matches!(result, Err(AppError::TimestampParse(_))));
    assert!(!site_dir.exists());
}

#[tokio::test]
async fn test_source_failure_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/iggolf.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let out = tempdir().unwrap();
    let site_dir = out.path().join("site");
    let config = test_config(format!("{}/iggolf.json", server.uri()), &site_dir);

    let result = build_site(&config, fixed_now()).await;

    assert!(matches!(result, Err(AppError::SourceServerError { .. })));
    assert!(!site_dir.exists());
}
