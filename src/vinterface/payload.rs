//! Request bodies for the vtn-vinterface RPCs

use super::spec::InterfaceSpec;
use serde::Serialize;
use serde_json::{json, Value};

/// update-mode sent on create
pub const UPDATE_MODE: &str = "UPDATE";

/// `input` of vtn-vinterface:update-vinterface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct UpdateVInterfaceInput<'a> {
    pub tenant_name: &'a str,
    pub update_mode: &'static str,
    pub bridge_name: &'a str,
    pub interface_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<&'static str>,
}

/// `input` of vtn-vinterface:remove-vinterface. Only the coordinates and the
/// terminal binding; operation, description, enabled and update-mode are never sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RemoveVInterfaceInput<'a> {
    pub tenant_name: &'a str,
    pub bridge_name: &'a str,
    pub interface_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_name: Option<&'a str>,
}

impl<'a> From<&'a InterfaceSpec> for UpdateVInterfaceInput<'a> {
    fn from(spec: &'a InterfaceSpec) -> Self {
        Self {
            tenant_name: &spec.tenant_name,
            update_mode: UPDATE_MODE,
            bridge_name: &spec.bridge_name,
            interface_name: &spec.interface_name,
            operation: spec.operation.map(|op| op.as_str()),
            description: spec.description.as_deref(),
            terminal_name: spec.terminal_name.as_deref(),
            enabled: spec.enabled_text(),
        }
    }
}

impl<'a> From<&'a InterfaceSpec> for RemoveVInterfaceInput<'a> {
    fn from(spec: &'a InterfaceSpec) -> Self {
        Self {
            tenant_name: &spec.tenant_name,
            bridge_name: &spec.bridge_name,
            interface_name: &spec.interface_name,
            terminal_name: spec.terminal_name.as_deref(),
        }
    }
}

/// Body for creating the interface: `{"input": {...}}`
pub fn build_create_payload(spec: &InterfaceSpec) -> Value {
    json!({ "input": UpdateVInterfaceInput::from(spec) })
}

/// Body for removing the interface: `{"input": {...}}`
pub fn build_delete_payload(spec: &InterfaceSpec) -> Value {
    json!({ "input": RemoveVInterfaceInput::from(spec) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vinterface::spec::UpdateOperation;

    fn full_spec() -> InterfaceSpec {
        InterfaceSpec {
            enabled: Some(false),
            operation: Some(UpdateOperation::Set),
            description: Some("uplink".to_string()),
            terminal_name: Some("term-1".to_string()),
            ..InterfaceSpec::new("T1", "B1", "I1")
        }
    }

    #[test]
    fn test_create_payload_with_enabled() {
        let spec = InterfaceSpec {
            enabled: Some(true),
            ..InterfaceSpec::new("T1", "B1", "I1")
        };
        assert_eq!(
            build_create_payload(&spec),
            json!({
                "input": {
                    "tenant-name": "T1",
                    "update-mode": "UPDATE",
                    "bridge-name": "B1",
                    "interface-name": "I1",
                    "enabled": "true"
                }
            })
        );
    }

    #[test]
    fn test_create_payload_all_fields() {
        assert_eq!(
            build_create_payload(&full_spec()),
            json!({
                "input": {
                    "tenant-name": "T1",
                    "update-mode": "UPDATE",
                    "bridge-name": "B1",
                    "interface-name": "I1",
                    "operation": "SET",
                    "description": "uplink",
                    "terminal-name": "term-1",
                    "enabled": "false"
                }
            })
        );
    }

    #[test]
    fn test_create_payload_omits_unset_operation() {
        let payload = build_create_payload(&InterfaceSpec::new("T1", "B1", "I1"));
        let input = payload["input"].as_object().unwrap();
        assert!(!input.contains_key("operation"));
        assert!(!input.contains_key("enabled"));
        assert_eq!(input.len(), 4);
    }

    #[test]
    fn test_delete_payload_keeps_only_coordinates_and_terminal() {
        assert_eq!(
            build_delete_payload(&full_spec()),
            json!({
                "input": {
                    "tenant-name": "T1",
                    "bridge-name": "B1",
                    "interface-name": "I1",
                    "terminal-name": "term-1"
                }
            })
        );

        let bare = build_delete_payload(&InterfaceSpec::new("T1", "B1", "I1"));
        assert_eq!(bare["input"].as_object().unwrap().len(), 3);
    }
}
