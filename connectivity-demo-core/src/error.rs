//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum DemoError {
    /// The resolve stage answered 404 for the requested name
    #[error("service {0} not found..")]
    ServiceNotFound(String),

    /// The action stage answered a client/server error status (> 399)
    #[error("service error ({status}): {message}")]
    ActionFailed { status: u16, message: String },

    /// Transport-level failure (DNS, connect, timeout, aborted body read)
    #[error("network error: {0}")]
    NetworkError(String),

    /// Response body did not match the expected payload shape
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Bad panel configuration or user input
    #[error("validation error: {0}")]
    ValidationError(String),
}

impl DemoError {
    /// Whether the error is expected behavior (unresolved name, failing
    /// remote check) rather than a fault in this program. Used for log
    /// level classification: `warn` when `true`, `error` when `false`.
    ///
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::ServiceNotFound(_) | Self::ActionFailed { .. } | Self::ValidationError(_)
        )
    }
}

/// Core layer Result type alias
pub type DemoResult<T> = std::result::Result<T, DemoError>;
