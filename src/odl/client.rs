//! Controller Client
//!
//! Main client for the controller's RESTCONF API, combining authentication
//! and HTTP functionality.

use super::auth::Credentials;
use super::http::OdlHttpClient;
use super::{RawResponse, Transport};
use crate::error::TransportError;
use async_trait::async_trait;
use serde_json::Value;
use url::Url;

/// Default RESTCONF endpoint of a local controller
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8181/";

/// Environment variable consulted for the endpoint
pub const ENDPOINT_ENV: &str = "ODL_ENDPOINT";

/// Main controller client
#[derive(Clone)]
pub struct OdlClient {
    pub credentials: Credentials,
    pub http: OdlHttpClient,
    base_url: Url,
}

impl OdlClient {
    /// Create a new client for the controller at `endpoint`
    pub fn new(endpoint: &str, credentials: Credentials) -> Result<Self, TransportError> {
        // Url::join drops the last segment unless the base ends with '/'
        let normalized = if endpoint.ends_with('/') {
            endpoint.to_string()
        } else {
            format!("{}/", endpoint)
        };
        let base_url = Url::parse(&normalized).map_err(|source| TransportError::InvalidUrl {
            url: endpoint.to_string(),
            source,
        })?;

        let http = OdlHttpClient::new()?;

        Ok(Self {
            credentials,
            http,
            base_url,
        })
    }

    /// Build an absolute URL for a path relative to the endpoint
    pub fn url(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|source| TransportError::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                source,
            })
    }
}

#[async_trait]
impl Transport for OdlClient {
    async fn post(&self, path: &str, body: &Value) -> Result<RawResponse, TransportError> {
        let url = self.url(path)?;
        self.http.post(url.as_str(), &self.credentials, body).await
    }

    async fn get(&self, path: &str) -> Result<RawResponse, TransportError> {
        let url = self.url(path)?;
        self.http.get(url.as_str(), &self.credentials).await
    }
}
