//! One-shot fetch of the tee-time document

use reqwest::Client;
use reqwest::header::CACHE_CONTROL;
use tracing::{debug, error, info};

use crate::error::AppError;
use crate::tee_times::models::TeeTimeDocument;

/// Fetches the tee-time document from the source URL.
///
/// One GET per run: no caching, no retries, no fallback output. A
/// `Cache-Control: no-cache` header asks the host for a fresh document rather
/// than a stale CDN copy.
///
/// The source URL is the secret that protects the document, so neither the
/// URL nor the response body is ever written to the logs; reqwest errors are
/// stripped of the URL before they surface.
///
/// # Arguments
/// * `client` - HTTP client for making the request
/// * `source_url` - The secret document URL
///
/// # Returns
/// * `Result<TeeTimeDocument, AppError>` - Parsed document or a terminal error
pub async fn fetch_tee_times(
    client: &Client,
    source_url: &str,
) -> Result<TeeTimeDocument, AppError> {
    info!("Fetching tee-time document from source");

    let response = match client
        .get(source_url)
        .header(CACHE_CONTROL, "no-cache")
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            let e = e.without_url();
            error!("Tee-time source request failed: {e}");
            return Err(if e.is_timeout() {
                AppError::NetworkTimeout
            } else if e.is_connect() {
                AppError::network_connection(e.to_string())
            } else {
                AppError::SourceFetch(e)
            });
        }
    };

    let status = response.status();
    debug!("Source response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("Tee-time source returned HTTP {status_code} - {reason}");

        return Err(match status_code {
            404 => AppError::SourceNotFound,
            429 => AppError::source_rate_limit(reason),
            502 | 503 => AppError::source_unavailable(status_code, reason),
            400..=499 => AppError::source_client_error(status_code, reason),
            _ => AppError::source_server_error(status_code, reason),
        });
    }

    let body = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            let e = e.without_url();
            error!("Failed to read tee-time response body: {e}");
            return Err(AppError::SourceFetch(e));
        }
    };

    debug!("Source response length: {} bytes", body.len());

    match serde_json::from_str::<TeeTimeDocument>(&body) {
        Ok(doc) => Ok(doc),
        Err(e) => {
            // Distinguish malformed JSON from an unexpected structure; the
            // body itself stays out of the logs
            error!("Failed to parse tee-time document: {e}");
            if body.trim().is_empty() {
                Err(AppError::source_no_data("Response body is empty"))
            } else if !body.trim_start().starts_with('{') && !body.trim_start().starts_with('[') {
                Err(AppError::source_malformed_json("Response is not valid JSON"))
            } else {
                Err(AppError::source_unexpected_structure(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tee_times::http_client::create_test_http_client;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_source(body: &str, status: u16) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/iggolf.json"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_fetch_parses_a_valid_document() {
        let body = r#"{"nextTee": {"whenISO": "2024-05-04T09:10:00Z"}}"#;
        let server = mock_source(body, 200).await;
        let client = create_test_http_client();

        let doc = fetch_tee_times(&client, &format!("{}/iggolf.json", server.uri()))
            .await
            .unwrap();

        assert_eq!(
            doc.next_tee.unwrap().when_iso.as_deref(),
            Some("2024-05-04T09:10:00Z")
        );
        assert!(doc.today_tee.is_none());
    }

    #[tokio::test]
    async fn test_fetch_sends_no_cache_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/iggolf.json"))
            .and(header("cache-control", "no-cache"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;
        let client = create_test_http_client();

        let result = fetch_tee_times(&client, &format!("{}/iggolf.json", server.uri())).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_maps_404_to_source_not_found() {
        let server = mock_source("", 404).await;
        let client = create_test_http_client();

        let result = fetch_tee_times(&client, &format!("{}/iggolf.json", server.uri())).await;
        assert!(matches!(result, Err(AppError::SourceNotFound)));
    }

    #[tokio::test]
    async fn test_fetch_maps_429_to_rate_limit() {
        let server = mock_source("", 429).await;
        let client = create_test_http_client();

        let result = fetch_tee_times(&client, &format!("{}/iggolf.json", server.uri())).await;
        assert!(matches!(result, Err(AppError::SourceRateLimit { .. })));
    }

    #[tokio::test]
    async fn test_fetch_maps_500_to_server_error() {
        let server = mock_source("", 500).await;
        let client = create_test_http_client();

        let result = fetch_tee_times(&client, &format!("{}/iggolf.json", server.uri())).await;
        match result {
            Err(AppError::SourceServerError { status, .. }) => assert_eq!(status, 500),
            other => panic!("Expected server error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_maps_503_to_unavailable() {
        let server = mock_source("", 503).await;
        let client = create_test_http_client();

        let result = fetch_tee_times(&client, &format!("{}/iggolf.json", server.uri())).await;
        assert!(matches!(result, Err(AppError::SourceUnavailable { .. })));
    }

    #[tokio::test]
    async fn test_fetch_rejects_empty_body() {
        let server = mock_source("", 200).await;
        let client = create_test_http_client();

        let result = fetch_tee_times(&client, &format!("{}/iggolf.json", server.uri())).await;
        assert!(matches!(result, Err(AppError::SourceNoData { .. })));
    }

    #[tokio::test]
    async fn test_fetch_rejects_non_json_body() {
        let server = mock_source("<html>Sign in required</html>", 200).await;
        let client = create_test_http_client();

        let result = fetch_tee_times(&client, &format!("{}/iggolf.json", server.uri())).await;
        assert!(matches!(result, Err(AppError::SourceMalformedJson { .. })));
    }

    #[tokio::test]
    async fn test_fetch_rejects_unexpected_structure() {
        let server = mock_source(r#"{"nextTee": 42}"#, 200).await;
        let client = create_test_http_client();

        let result = fetch_tee_times(&client, &format!("{}/iggolf.json", server.uri())).await;
        assert!(matches!(
            result,
            Err(AppError::SourceUnexpectedStructure { .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_transport_error_message_has_no_url() {
        // Port 1 refuses connections; whatever error surfaces must not echo
        // the secret URL back
        let client = create_test_http_client();

        let err = fetch_tee_times(&client, "http://127.0.0.1:1/secret-document.json")
            .await
            .unwrap_err();
        assert!(!err.to_string().contains("secret-document"));
    }
}
