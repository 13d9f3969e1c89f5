//! Virtual interface resource
//!
//! Lifecycle of a VTN virtual interface (a port on a vBridge inside a tenant)
//! on the SDN controller. The resource has no update: any attribute change
//! is a destroy followed by a create.
//!
//! # Architecture
//!
//! - [`spec`] - Validates declared attributes into an [`InterfaceSpec`]
//! - [`payload`] - Builds the update/remove RPC bodies
//! - [`response`] - Classifies replies into success, structured error or failure
//! - [`tree`] - Scans the operational tree for a tenant/bridge/interface triple
//! - [`identity`] - Resource keys and the identity recorded by the engine
//! - [`controller`] - Create, Read and Delete
//!
//! # Example
//!
//! ```ignore
//! use vtnctl::odl::{auth::Credentials, client::OdlClient};
//! use vtnctl::vinterface::{InterfaceSpec, VInterfaceController};
//!
//! async fn create(attrs: &serde_json::Value) -> anyhow::Result<String> {
//!     let client = OdlClient::new("http://127.0.0.1:8181", Credentials::default())?;
//!     let controller = VInterfaceController::new(client);
//!     let spec = InterfaceSpec::from_attributes(attrs)?;
//!     Ok(controller.create(&spec).await?.to_string())
//! }
//! ```

pub mod controller;
pub mod identity;
pub mod payload;
pub mod response;
pub mod spec;
pub mod tree;

pub use controller::VInterfaceController;
pub use identity::{RemoteIdentity, ResourceKey, ResourceState};
pub use payload::{build_create_payload, build_delete_payload};
pub use response::{interpret, InterpretedResult};
pub use spec::{InterfaceSpec, UpdateOperation, ATTRIBUTES};
