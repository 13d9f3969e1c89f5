//! Resource identity
//!
//! [`ResourceKey`] is the structured identity used inside the controller.
//! [`RemoteIdentity`] is the opaque string handed back to the engine; it keeps
//! the legacy undelimited form so existing state files still compare equal.

use std::fmt;

/// Coordinates of a virtual interface on the controller
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKey {
    pub tenant: String,
    pub bridge: String,
    pub interface: String,
}

impl ResourceKey {
    pub fn new(tenant: &str, bridge: &str, interface: &str) -> Self {
        Self {
            tenant: tenant.to_string(),
            bridge: bridge.to_string(),
            interface: interface.to_string(),
        }
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.tenant, self.bridge, self.interface)
    }
}

/// Whether the engine should consider the resource present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceState {
    Absent,
    Present,
}

/// Identifier recorded by the engine. Empty means absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteIdentity(String);

impl RemoteIdentity {
    /// Identity of a resource that does not exist
    pub fn absent() -> Self {
        Self(String::new())
    }

    /// Wrap an identity previously recorded by the engine
    pub fn from_recorded(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Legacy identity: tenant, bridge, interface and create status concatenated
    /// without a delimiter.
    ///
    /// Distinct keys can alias (tenant "ab" + bridge "c" vs "a" + "bc"). The
    /// controller never parses identities back, it only compares them and
    /// checks emptiness, so the aliasing cannot select the wrong object.
    pub fn compose(key: &ResourceKey, status: &str) -> Self {
        Self(format!("{}{}{}{}", key.tenant, key.bridge, key.interface, status))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_empty()
    }

    pub fn state(&self) -> ResourceState {
        if self.is_absent() {
            ResourceState::Absent
        } else {
            ResourceState::Present
        }
    }
}

impl fmt::Display for RemoteIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_is_undelimited_concatenation() {
        let key = ResourceKey::new("T1", "B1", "I1");
        let id = RemoteIdentity::compose(&key, "OK");
        assert_eq!(id.as_str(), "T1B1I1OK");
        assert_eq!(id.state(), ResourceState::Present);
    }

    #[test]
    fn test_absent_identity() {
        let id = RemoteIdentity::absent();
        assert!(id.is_absent());
        assert_eq!(id.state(), ResourceState::Absent);
        assert_eq!(RemoteIdentity::default(), id);
    }

    #[test]
    fn test_legacy_form_can_alias_but_keys_do_not() {
        let a = ResourceKey::new("ab", "c", "i");
        let b = ResourceKey::new("a", "bc", "i");
        assert_eq!(RemoteIdentity::compose(&a, "OK"), RemoteIdentity::compose(&b, "OK"));
        assert_ne!(a, b);
        assert_ne!(a.to_string(), b.to_string());
    }
}
