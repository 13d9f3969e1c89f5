//! Declared attributes of a virtual interface
//!
//! The engine hands over the declared attributes as a JSON object keyed by
//! schema attribute name. [`InterfaceSpec::from_attributes`] validates them once;
//! everything downstream works on the typed spec.

use super::identity::ResourceKey;
use crate::error::{Result, VInterfaceError};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

pub const TENANT_NAME: &str = "tenant_name";
pub const BRIDGE_NAME: &str = "bridge_name";
pub const INTERFACE_NAME: &str = "interface_name";
pub const ENABLED: &str = "enabled";
pub const OPERATION: &str = "operation";
pub const DESCRIPTION: &str = "description";
pub const TERMINAL_NAME: &str = "terminal_name";

/// Attribute value type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    String,
    Bool,
}

/// Schema entry for one declared attribute
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AttributeDef {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: AttributeType,
    pub required: bool,
    /// Changing the attribute forces destroy + recreate
    pub force_new: bool,
}

/// Attributes of the virtual interface resource. There is no in-place
/// update, so every attribute forces a new resource.
pub const ATTRIBUTES: &[AttributeDef] = &[
    AttributeDef {
        name: TENANT_NAME,
        kind: AttributeType::String,
        required: true,
        force_new: true,
    },
    AttributeDef {
        name: BRIDGE_NAME,
        kind: AttributeType::String,
        required: true,
        force_new: true,
    },
    AttributeDef {
        name: INTERFACE_NAME,
        kind: AttributeType::String,
        required: true,
        force_new: true,
    },
    AttributeDef {
        name: ENABLED,
        kind: AttributeType::Bool,
        required: false,
        force_new: true,
    },
    AttributeDef {
        name: OPERATION,
        kind: AttributeType::String,
        required: false,
        force_new: true,
    },
    AttributeDef {
        name: DESCRIPTION,
        kind: AttributeType::String,
        required: false,
        force_new: true,
    },
    AttributeDef {
        name: TERMINAL_NAME,
        kind: AttributeType::String,
        required: false,
        force_new: true,
    },
];

/// How the controller applies an update-vinterface request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOperation {
    /// Replace the whole configuration
    Set,
    /// Merge into the existing configuration
    Add,
    /// Remove the given settings
    Remove,
}

impl UpdateOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateOperation::Set => "SET",
            UpdateOperation::Add => "ADD",
            UpdateOperation::Remove => "REMOVE",
        }
    }
}

impl fmt::Display for UpdateOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpdateOperation {
    type Err = VInterfaceError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "SET" => Ok(UpdateOperation::Set),
            "ADD" => Ok(UpdateOperation::Add),
            "REMOVE" => Ok(UpdateOperation::Remove),
            other => Err(VInterfaceError::InvalidOperation {
                value: other.to_string(),
            }),
        }
    }
}

/// Validated virtual interface declaration. `None` means the attribute was
/// not supplied and must not appear on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceSpec {
    pub tenant_name: String,
    pub bridge_name: String,
    pub interface_name: String,
    pub enabled: Option<bool>,
    pub operation: Option<UpdateOperation>,
    pub description: Option<String>,
    pub terminal_name: Option<String>,
}

impl InterfaceSpec {
    /// Spec with only the identifying coordinates set
    pub fn new(
        tenant_name: impl Into<String>,
        bridge_name: impl Into<String>,
        interface_name: impl Into<String>,
    ) -> Self {
        Self {
            tenant_name: tenant_name.into(),
            bridge_name: bridge_name.into(),
            interface_name: interface_name.into(),
            enabled: None,
            operation: None,
            description: None,
            terminal_name: None,
        }
    }

    /// Extract and validate a spec from declared attributes.
    ///
    /// Missing keys and `null` are "not supplied", as is an empty string for
    /// an optional string attribute. An explicit `false` for `enabled` is kept.
    pub fn from_attributes(attrs: &Value) -> Result<Self> {
        let Some(map) = attrs.as_object() else {
            return Err(VInterfaceError::InvalidField {
                field: "attributes",
                reason: "expected a JSON object".to_string(),
            });
        };

        let operation = optional_string(map, OPERATION)?
            .map(|op| op.parse::<UpdateOperation>())
            .transpose()?;

        let spec = Self {
            tenant_name: required_string(map, TENANT_NAME)?,
            bridge_name: required_string(map, BRIDGE_NAME)?,
            interface_name: required_string(map, INTERFACE_NAME)?,
            enabled: optional_bool(map, ENABLED)?,
            operation,
            description: optional_string(map, DESCRIPTION)?,
            terminal_name: optional_string(map, TERMINAL_NAME)?,
        };

        tracing::debug!(
            "Extracted spec for interface {} ({} optional attributes set)",
            spec.key(),
            spec.optional_count()
        );

        Ok(spec)
    }

    pub fn key(&self) -> ResourceKey {
        ResourceKey::new(&self.tenant_name, &self.bridge_name, &self.interface_name)
    }

    /// `enabled` in its wire form ("true"/"false"), only when supplied
    pub fn enabled_text(&self) -> Option<&'static str> {
        self.enabled.map(|e| if e { "true" } else { "false" })
    }

    fn optional_count(&self) -> usize {
        [
            self.enabled.is_some(),
            self.operation.is_some(),
            self.description.is_some(),
            self.terminal_name.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}

fn required_string(map: &Map<String, Value>, field: &'static str) -> Result<String> {
    match optional_string(map, field)? {
        Some(value) => Ok(value),
        None => Err(VInterfaceError::MissingRequiredField { field }),
    }
}

fn optional_string(map: &Map<String, Value>, field: &'static str) -> Result<Option<String>> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(VInterfaceError::InvalidField {
            field,
            reason: format!("expected a string, got {}", other),
        }),
    }
}

fn optional_bool(map: &Map<String, Value>, field: &'static str) -> Result<Option<bool>> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(VInterfaceError::InvalidField {
            field,
            reason: format!("expected a boolean, got {}", other),
        }),
    }
}
