//! HTTP utilities for RESTCONF calls

use super::auth::Credentials;
use super::RawResponse;
use crate::error::TransportError;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and strips control characters
pub(crate) fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let mut end = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... [truncated, {} bytes total]", &body[..end], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// HTTP client wrapper for RESTCONF calls
#[derive(Clone)]
pub struct OdlHttpClient {
    client: Client,
}

impl OdlHttpClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("vtnctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(TransportError::Client)?;

        Ok(Self { client })
    }

    /// Make a GET request
    pub async fn get(
        &self,
        url: &str,
        credentials: &Credentials,
    ) -> Result<RawResponse, TransportError> {
        tracing::debug!("GET {}", url);

        let request = self.client.get(url);
        self.execute(url, request, credentials).await
    }

    /// Make a POST request with a JSON body
    pub async fn post(
        &self,
        url: &str,
        credentials: &Credentials,
        body: &Value,
    ) -> Result<RawResponse, TransportError> {
        tracing::debug!("POST {}", url);

        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(body);
        self.execute(url, request, credentials).await
    }

    /// Send a request and capture status and body.
    ///
    /// Non-2xx statuses are returned as responses, not errors: RESTCONF puts
    /// its error envelope in the body of 4xx/5xx replies.
    async fn execute(
        &self,
        url: &str,
        request: RequestBuilder,
        credentials: &Credentials,
    ) -> Result<RawResponse, TransportError> {
        let response = request
            .basic_auth(&credentials.username, Some(&credentials.password))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| TransportError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| TransportError::Body {
            url: url.to_string(),
            source,
        })?;

        if status.is_success() {
            tracing::debug!("{} -> {}", url, status);
        } else {
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
        }

        Ok(RawResponse {
            status: status.as_u16(),
            body,
        })
    }
}
