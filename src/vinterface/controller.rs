//! Virtual interface lifecycle controller
//!
//! Create, Read and Delete against the controller. The state lives entirely in
//! the [`RemoteIdentity`] the engine passes in and gets back: an empty identity
//! is `Absent`, anything else is `Present`. Nothing is cached between calls,
//! and nothing is retried.

use super::identity::RemoteIdentity;
use super::payload::{build_create_payload, build_delete_payload};
use super::response::{interpret, is_data_missing, parse_error_envelope, structured_error};
use super::spec::InterfaceSpec;
use super::tree;
use crate::error::{Operation, Result, VInterfaceError};
use crate::odl::{Transport, OPERATIONAL_VTNS_PATH, REMOVE_VINTERFACE_PATH, UPDATE_VINTERFACE_PATH};
use tracing::{debug, error, info, warn};

/// Drives the lifecycle of virtual interfaces through a [`Transport`]
pub struct VInterfaceController<T> {
    transport: T,
}

impl<T: Transport> VInterfaceController<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Create the interface. Returns the identity to record on success; on
    /// failure nothing was created as far as the engine is concerned.
    pub async fn create(&self, spec: &InterfaceSpec) -> Result<RemoteIdentity> {
        let key = spec.key();
        debug!("Creating interface {}", key);

        let body = build_create_payload(spec);
        debug!("All options collected for interface {}", key);

        let status = interpret(self.transport.post(UPDATE_VINTERFACE_PATH, &body).await)
            .into_status(Operation::Create)
            .inspect_err(|e| error!("While creating interface {}: {}", key, e))?;

        let identity = RemoteIdentity::compose(&key, &status);
        info!("Created interface {} (status {})", key, status);
        Ok(identity)
    }

    /// Look the interface up in the operational tree. Returns `identity`
    /// unchanged when the interface exists and the absent identity when it
    /// does not. A failed lookup is an error, never an implied absence.
    pub async fn read(
        &self,
        spec: &InterfaceSpec,
        identity: RemoteIdentity,
    ) -> Result<RemoteIdentity> {
        let key = spec.key();
        debug!("Reading interface {}", key);

        let response = self
            .transport
            .get(OPERATIONAL_VTNS_PATH)
            .await
            .map_err(|cause| VInterfaceError::Transport {
                op: Operation::Read,
                cause,
            })
            .inspect_err(|e| error!("Interface read failed: {}", e))?;

        let present = match parse_error_envelope(&response.body) {
            // No tenant configured at all
            Some(errors) if is_data_missing(&errors) => false,
            Some(errors) => {
                let err = structured_error(Operation::Read, errors);
                error!("Interface read failed: {}", err);
                return Err(err);
            }
            None if !(200..300).contains(&response.status) => {
                let err = VInterfaceError::MalformedResponse {
                    op: Operation::Read,
                    cause: format!(
                        "HTTP {}: body is neither a tenant tree nor an errors envelope",
                        response.status
                    ),
                };
                error!("Interface read failed: {}", err);
                return Err(err);
            }
            None => tree::exists(&response.body, &key)
                .inspect_err(|e| error!("Interface read failed: {}", e))?,
        };

        if present {
            debug!("Interface {} is present", key);
            Ok(identity)
        } else {
            if !identity.is_absent() {
                warn!("Interface {} was not found, clearing identity", key);
            }
            Ok(RemoteIdentity::absent())
        }
    }

    /// Delete the interface. Re-reads first and refuses, without calling the
    /// remove RPC, when the interface is already gone or the read fails.
    /// Failures of that read are reported as delete failures. Returns the
    /// absent identity on success.
    pub async fn delete(
        &self,
        spec: &InterfaceSpec,
        identity: RemoteIdentity,
    ) -> Result<RemoteIdentity> {
        let key = spec.key();

        let identity = self
            .read(spec, identity)
            .await
            .map_err(|e| e.with_op(Operation::Delete))?;
        if identity.is_absent() {
            error!("Interface {} does not exist", key);
            return Err(VInterfaceError::ResourceNotFound {
                key: key.to_string(),
            });
        }

        let body = build_delete_payload(spec);
        debug!("Preparing to destroy interface {}", key);

        let status = interpret(self.transport.post(REMOVE_VINTERFACE_PATH, &body).await)
            .into_status(Operation::Delete)
            .inspect_err(|e| error!("While destroying interface {}: {}", key, e))?;

        info!("Destroyed interface {} (status {})", key, status);
        Ok(RemoteIdentity::absent())
    }
}
