//! Page fetching with HTTP status and transport error mapping

use reqwest::Client;
use tracing::{debug, error, info, instrument};

use super::urls::build_schedule_url;
use crate::error::AppError;

/// Fetches a page and returns its body text.
///
/// Non-success status codes are mapped onto specific [`AppError`] variants.
/// An empty body is reported as [`AppError::PageEmpty`]. There is no retry;
/// a failed fetch simply fails this run.
#[instrument(skip(client))]
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, AppError> {
    info!("Fetching page: {url}");

    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::PageFetch(e)
            });
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::page_not_found(url),
            429 => AppError::page_rate_limit(reason, url),
            400..=499 => AppError::page_client_error(status_code, reason, url),
            502 | 503 => AppError::page_service_unavailable(status_code, reason, url),
            _ => AppError::page_server_error(status_code, reason, url),
        });
    }

    let body = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::PageFetch(e)
    })?;

    if body.trim().is_empty() {
        error!("Empty response body from URL: {url}");
        return Err(AppError::page_empty(url));
    }

    debug!("Response length: {} bytes", body.len());
    Ok(body)
}

/// Fetches the schedule page for one `YYYY-MM-DD` date.
pub async fn fetch_schedule_page(
    client: &Client,
    base_url: &str,
    date: &str,
) -> Result<String, AppError> {
    let url = build_schedule_url(base_url, date);
    fetch_page(client, &url).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_page_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/npb/schedule/"))
            .and(query_param("date", "2025-03-10"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html><tbody></tbody></html>"))
            .mount(&server)
            .await;

        let client = create_test_http_client();
        let base = format!("{}/npb/schedule/", server.uri());
        let body = fetch_schedule_page(&client, &base, "2025-03-10").await.unwrap();
        assert!(body.contains("<tbody>"));
    }

    #[tokio::test]
    async fn test_fetch_page_status_mapping() {
        let cases = [
            (404, "not_found"),
            (429, "rate_limit"),
            (403, "client"),
            (503, "unavailable"),
            (500, "server"),
        ];

        for (status, label) in cases {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(status))
                .mount(&server)
                .await;

            let client = create_test_http_client();
            let err = fetch_page(&client, &server.uri()).await.unwrap_err();
            let matched = match label {
                "not_found" => matches!(err, AppError::PageNotFound { .. }),
                "rate_limit" => matches!(err, AppError::PageRateLimit { .. }),
                "client" => matches!(err, AppError::PageClientError { status: 403, .. }),
                "unavailable" => matches!(err, AppError::PageServiceUnavailable { status: 503, .. }),
                _ => matches!(err, AppError::PageServerError { status: 500, .. }),
            };
            assert!(matched, "status {status} mapped to unexpected error: {err:?}");
        }
    }

    #[tokio::test]
    async fn test_fetch_page_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("  \n "))
            .mount(&server)
            .await;

        let client = create_test_http_client();
        let err = fetch_page(&client, &server.uri()).await.unwrap_err();
        assert!(matches!(err, AppError::PageEmpty { .. }));
    }
}
