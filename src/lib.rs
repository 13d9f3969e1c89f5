//! vtnctl - lifecycle controller for VTN virtual interfaces
//!
//! Creates, reads (drift detection) and deletes virtual interfaces on an
//! OpenDaylight VTN controller through its RESTCONF API.

pub mod config;
pub mod error;
pub mod odl;
pub mod vinterface;

pub use error::{Operation, Result, TransportError, VInterfaceError};
