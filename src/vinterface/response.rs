//! Classification of controller replies
//!
//! Every exchange is decoded once into an [`InterpretedResult`]; nothing past
//! this module looks at raw bodies.

use crate::error::{Operation, Result, TransportError, VInterfaceError};
use crate::odl::http::sanitize_for_log;
use crate::odl::RawResponse;
use serde::Deserialize;

/// RESTCONF error-tag the controller uses when the requested data does not exist
pub const DATA_MISSING_TAG: &str = "data-missing";

#[derive(Debug, Deserialize)]
struct SuccessEnvelope {
    output: RpcOutput,
}

#[derive(Debug, Deserialize)]
struct RpcOutput {
    status: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    errors: ErrorList,
}

#[derive(Debug, Deserialize)]
struct ErrorList {
    error: Vec<RemoteError>,
}

/// One entry of `errors.error`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteError {
    #[serde(alias = "error-message")]
    pub message: String,
    #[serde(rename = "error-tag", default)]
    pub tag: Option<String>,
}

/// Why no usable reply was obtained
#[derive(Debug)]
pub enum FailureCause {
    /// The HTTP layer failed
    Transport(TransportError),
    /// A body arrived that is neither envelope
    Malformed(String),
}

/// Outcome of one exchange with the controller
#[derive(Debug)]
pub enum InterpretedResult {
    Success { status: String },
    StructuredError { errors: Vec<RemoteError> },
    TransportFailure(FailureCause),
}

/// Classify a reply: transport failure, then success envelope, then error
/// envelope with at least one entry, otherwise a malformed response.
pub fn interpret(raw: std::result::Result<RawResponse, TransportError>) -> InterpretedResult {
    let response = match raw {
        Ok(response) => response,
        Err(e) => return InterpretedResult::TransportFailure(FailureCause::Transport(e)),
    };

    if let Ok(envelope) = serde_json::from_str::<SuccessEnvelope>(&response.body) {
        return InterpretedResult::Success {
            status: envelope.output.status,
        };
    }

    if let Some(errors) = parse_error_envelope(&response.body) {
        return InterpretedResult::StructuredError { errors };
    }

    tracing::debug!(
        "Unrecognized reply (HTTP {}): {}",
        response.status,
        sanitize_for_log(&response.body)
    );
    InterpretedResult::TransportFailure(FailureCause::Malformed(format!(
        "HTTP {}: body is neither an output nor an errors envelope",
        response.status
    )))
}

/// Decode `errors.error`; `None` unless it holds at least one entry
pub fn parse_error_envelope(body: &str) -> Option<Vec<RemoteError>> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.errors.error)
        .filter(|errors| !errors.is_empty())
}

/// True when every entry reports missing data
pub fn is_data_missing(errors: &[RemoteError]) -> bool {
    !errors.is_empty()
        && errors
            .iter()
            .all(|e| e.tag.as_deref() == Some(DATA_MISSING_TAG))
}

impl InterpretedResult {
    /// Output status on success, otherwise the matching error for `op`
    pub fn into_status(self, op: Operation) -> Result<String> {
        match self {
            InterpretedResult::Success { status } => Ok(status),
            InterpretedResult::StructuredError { errors } => Err(structured_error(op, errors)),
            InterpretedResult::TransportFailure(FailureCause::Transport(cause)) => {
                Err(VInterfaceError::Transport { op, cause })
            }
            InterpretedResult::TransportFailure(FailureCause::Malformed(cause)) => {
                Err(VInterfaceError::MalformedResponse { op, cause })
            }
        }
    }
}

pub(crate) fn structured_error(op: Operation, errors: Vec<RemoteError>) -> VInterfaceError {
    VInterfaceError::StructuredError {
        op,
        messages: errors.into_iter().map(|e| e.message).collect(),
    }
}
