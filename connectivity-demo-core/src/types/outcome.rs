//! Transient results produced by the two check stages.

use serde::{Deserialize, Serialize};

use crate::error::{DemoError, DemoResult};
use crate::types::AddressSource;

/// Raw `/resolv` response body.
///
/// Accepts both deployed shapes: an `ips` array or a single `message`
/// string, plus the echo fields the backend always includes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvePayload {
    /// Echo of the queried name.
    #[serde(default)]
    pub fqdn: Option<String>,
    /// Resolved addresses (variant A).
    #[serde(default)]
    pub ips: Option<Vec<String>>,
    /// Resolved address or human-readable text (variant B).
    #[serde(default)]
    pub message: Option<String>,
}

/// Outcome of the resolve stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// The name that was resolved.
    pub fqdn: String,
    /// The address picked from the payload per the panel's address source.
    pub address: String,
}

impl Resolution {
    /// Pick the address out of `payload` according to `source`.
    pub fn from_payload(
        fqdn: &str,
        payload: &ResolvePayload,
        source: AddressSource,
    ) -> DemoResult<Self> {
        let address = match source {
            AddressSource::Ips => payload
                .ips
                .as_ref()
                .and_then(|ips| ips.first())
                .cloned(),
            AddressSource::Message => payload.message.clone(),
        };
        let address = address.filter(|a| !a.is_empty()).ok_or_else(|| {
            DemoError::SerializationError(format!(
                "resolve response for {fqdn} is missing the {} field",
                match source {
                    AddressSource::Ips => "ips",
                    AddressSource::Message => "message",
                }
            ))
        })?;
        Ok(Self {
            fqdn: fqdn.to_string(),
            address,
        })
    }
}

/// Outcome of the action stage (web proxy, db connect or frame dump).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionOutcome {
    /// HTTP status answered by the backend.
    pub status: u16,
    /// Message payload; for the frame dump this is the whole document.
    pub message: String,
}
