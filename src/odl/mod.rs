//! Controller API interaction module
//!
//! This module provides the transport to the SDN controller's RESTCONF API:
//! authentication, the HTTP client, and the [`Transport`] seam the lifecycle
//! controller is written against.
//!
//! # Module Structure
//!
//! - [`auth`] - HTTP Basic credentials
//! - [`client`] - Controller client bound to an endpoint
//! - [`http`] - HTTP utilities for RESTCONF calls
//!
//! # Example
//!
//! ```ignore
//! use vtnctl::odl::{auth::Credentials, client::OdlClient, Transport};
//!
//! async fn example() -> anyhow::Result<()> {
//!     let client = OdlClient::new("http://127.0.0.1:8181", Credentials::default())?;
//!     let tree = client.get("restconf/operational/vtn:vtns").await?;
//!     println!("{}", tree.body);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod http;

use crate::error::TransportError;
use async_trait::async_trait;
use serde_json::Value;

/// RESTCONF operation that creates or updates a virtual interface
pub const UPDATE_VINTERFACE_PATH: &str = "restconf/operations/vtn-vinterface:update-vinterface";
/// RESTCONF operation that removes a virtual interface
pub const REMOVE_VINTERFACE_PATH: &str = "restconf/operations/vtn-vinterface:remove-vinterface";
/// Operational tree of all VTN tenants
pub const OPERATIONAL_VTNS_PATH: &str = "restconf/operational/vtn:vtns";

/// Status and body of an HTTP exchange, whatever the status code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Issues requests against the controller
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST a JSON body to a path relative to the endpoint
    async fn post(&self, path: &str, body: &Value) -> Result<RawResponse, TransportError>;

    /// GET a path relative to the endpoint
    async fn get(&self, path: &str) -> Result<RawResponse, TransportError>;
}
