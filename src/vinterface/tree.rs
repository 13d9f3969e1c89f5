//! Existence scan over the operational VTN tree
//!
//! Expected shape (missing lists are empty):
//!
//! ```text
//! {"vtns": {"vtn": [{"name": T, "vbridge": [{"name": B, "vinterface": [{"name": I}]}]}]}}
//! ```

use super::identity::ResourceKey;
use crate::error::{Operation, Result, VInterfaceError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct VtnsDocument {
    #[serde(alias = "vtn:vtns")]
    vtns: Vtns,
}

#[derive(Debug, Default, Deserialize)]
struct Vtns {
    #[serde(default)]
    vtn: Vec<Vtn>,
}

#[derive(Debug, Deserialize)]
struct Vtn {
    name: String,
    #[serde(default)]
    vbridge: Vec<VBridge>,
}

#[derive(Debug, Deserialize)]
struct VBridge {
    name: String,
    #[serde(default)]
    vinterface: Vec<VInterface>,
}

#[derive(Debug, Deserialize)]
struct VInterface {
    name: String,
}

/// Whether tenant, bridge and interface all exist in `body`. Names compare
/// exactly. A body that does not decode into the tree is an error, distinct
/// from "not found".
pub fn exists(body: &str, key: &ResourceKey) -> Result<bool> {
    let document: VtnsDocument =
        serde_json::from_str(body).map_err(|e| VInterfaceError::MalformedTree {
            op: Operation::Read,
            cause: e.to_string(),
        })?;

    let present = document
        .vtns
        .vtn
        .iter()
        .filter(|vtn| vtn.name == key.tenant)
        .flat_map(|vtn| vtn.vbridge.iter())
        .filter(|bridge| bridge.name == key.bridge)
        .flat_map(|bridge| bridge.vinterface.iter())
        .any(|iface| iface.name == key.interface);

    tracing::debug!("Existence scan for {}: present={}", key, present);
    Ok(present)
}
