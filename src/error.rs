//! Error types for vtnctl
//!
//! Library code returns [`VInterfaceError`]; only the binary flattens errors
//! into `anyhow` for display.

use std::fmt;
use thiserror::Error;

/// Lifecycle operation an error was raised from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => f.write_str("create"),
            Operation::Read => f.write_str("read"),
            Operation::Delete => f.write_str("delete"),
        }
    }
}

/// Failure of the HTTP layer itself (no usable response obtained)
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid endpoint URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Used by transports that are not backed by reqwest
    #[error("{0}")]
    Other(String),
}

/// Errors surfaced by the virtual interface lifecycle controller
#[derive(Debug, Error)]
pub enum VInterfaceError {
    /// A required attribute was missing or empty
    #[error("missing required attribute '{field}'")]
    MissingRequiredField { field: &'static str },

    /// `operation` was not one of the allowed update operations
    #[error("invalid operation '{value}', expected one of SET, ADD, REMOVE")]
    InvalidOperation { value: String },

    /// An attribute had the wrong type or the declared document was not an object
    #[error("invalid attribute '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// Network, connection or HTTP-level failure
    #[error("failed to {op} virtual interface: {cause}")]
    Transport {
        op: Operation,
        #[source]
        cause: TransportError,
    },

    /// The controller rejected the request. Only the first message is rendered;
    /// the full ordered list is kept in `messages`.
    #[error("failed to {op} virtual interface: {}", first_message(.messages))]
    StructuredError { op: Operation, messages: Vec<String> },

    /// A response arrived but matched neither the success nor the error envelope
    #[error("failed to {op} virtual interface: malformed response: {cause}")]
    MalformedResponse { op: Operation, cause: String },

    /// The operational tenant tree could not be decoded
    #[error("failed to {op} virtual interface: malformed operational tree: {cause}")]
    MalformedTree { op: Operation, cause: String },

    /// Delete precondition: the interface is not present on the controller
    #[error("failed to delete virtual interface {key}: does not exist")]
    ResourceNotFound { key: String },
}

fn first_message(messages: &[String]) -> &str {
    messages.first().map(String::as_str).unwrap_or("unknown error")
}

impl VInterfaceError {
    /// Re-tag a failure raised by a nested step with the operation the caller ran
    pub fn with_op(self, op: Operation) -> Self {
        match self {
            VInterfaceError::Transport { cause, .. } => VInterfaceError::Transport { op, cause },
            VInterfaceError::StructuredError { messages, .. } => {
                VInterfaceError::StructuredError { op, messages }
            }
            VInterfaceError::MalformedResponse { cause, .. } => {
                VInterfaceError::MalformedResponse { op, cause }
            }
            VInterfaceError::MalformedTree { cause, .. } => {
                VInterfaceError::MalformedTree { op, cause }
            }
            other => other,
        }
    }

    /// All remote messages of a structured error, in the order the controller sent them
    pub fn remote_messages(&self) -> &[String] {
        match self {
            VInterfaceError::StructuredError { messages, .. } => messages,
            _ => &[],
        }
    }
}

/// Result type alias for controller operations
pub type Result<T> = std::result::Result<T, VInterfaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_error_renders_first_message_only() {
        let err = VInterfaceError::StructuredError {
            op: Operation::Create,
            messages: vec!["bridge not found".to_string(), "retry later".to_string()],
        };

        let msg = err.to_string();
        assert!(msg.contains("create"));
        assert!(msg.contains("bridge not found"));
        assert!(!msg.contains("retry later"));
        assert_eq!(err.remote_messages().len(), 2);
    }

    #[test]
    fn test_transport_error_names_operation() {
        let err = VInterfaceError::Transport {
            op: Operation::Delete,
            cause: TransportError::Other("connection refused".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "failed to delete virtual interface: connection refused"
        );
        assert!(err.remote_messages().is_empty());
    }

    #[test]
    fn test_with_op_retags_nested_failures() {
        let err = VInterfaceError::MalformedTree {
            op: Operation::Read,
            cause: "EOF while parsing a value".to_string(),
        }
        .with_op(Operation::Delete);
        assert!(err.to_string().starts_with("failed to delete virtual interface"));

        let err = VInterfaceError::MissingRequiredField { field: "tenant_name" }
            .with_op(Operation::Delete);
        assert!(matches!(err, VInterfaceError::MissingRequiredField { .. }));
    }

    #[test]
    fn test_not_found_names_delete() {
        let err = VInterfaceError::ResourceNotFound {
            key: "T1/B1/I1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to delete virtual interface T1/B1/I1: does not exist"
        );
    }
}
