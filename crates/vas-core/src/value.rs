use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::ErrorId;

/// A failure surfaced to an HTTP client
///
/// Carries the client-facing fields (id, name, description, status) and an
/// optional internal diagnostic that is only ever logged. Values are built
/// once by a catalog constructor and never mutated afterwards.
#[derive(Debug, thiserror::Error)]
#[error("[{}] {id}: {name}", .status.as_u16())]
pub struct VasError {
    id: ErrorId,
    name: &'static str,
    description: Option<String>,
    status: StatusCode,
    internal: Option<anyhow::Error>,
}

impl VasError {
    /// Start a new error value with no description or internal detail
    ///
    /// Only catalog entries in this crate build values directly, so each
    /// id keeps one fixed name and status.
    pub(crate) const fn new(id: ErrorId, name: &'static str, status: StatusCode) -> Self {
        Self {
            id,
            name,
            description: None,
            status,
            internal: None,
        }
    }

    /// Attach a client-visible description
    #[must_use]
    pub(crate) fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }

    /// Attach an internal diagnostic, never sent to clients
    #[must_use]
    pub(crate) fn with_internal(self, internal: impl Into<anyhow::Error>) -> Self {
        Self {
            internal: Some(internal.into()),
            ..self
        }
    }

    pub const fn id(&self) -> ErrorId {
        self.id
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Server-side diagnostic, if any
    pub const fn internal(&self) -> Option<&anyhow::Error> {
        self.internal.as_ref()
    }

    /// Derive the subset of this error that is safe to send to the client
    pub fn client_view(&self) -> ClientError {
        ClientError {
            error_id: self.id,
            error_name: self.name.to_owned(),
            error_description: self.description.clone(),
            status_code: self.status.as_u16(),
        }
    }
}

/// Client-facing rendering of a [`VasError`]
///
/// This is the JSON object written to the response body. It has no field
/// for the internal diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientError {
    pub error_id: ErrorId,
    pub error_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    pub status_code: u16,
}
