//! The `{status, message, data}` envelope returned by every service call

use crate::error::FetchOutcome;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Normalized outcome of one resource fetch
///
/// `data` is present exactly when `status` is true. The failure message is
/// the same whatever went wrong; use the `try_*` service methods when the
/// cause matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchResult<T> {
    /// Whether the resource was retrieved
    pub status: bool,
    /// Fixed human-readable outcome
    pub message: String,
    /// Payload, only on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> FetchResult<T> {
    /// Success envelope for `label` (e.g. `Food`)
    pub fn fetched(label: &str, data: T) -> Self {
        Self {
            status: true,
            message: format!("{label} data fetched"),
            data: Some(data),
        }
    }

    /// Failure envelope for `label`
    pub fn not_found(label: &str) -> Self {
        Self {
            status: false,
            message: format!("{label} data not found"),
            data: None,
        }
    }

    /// Fold a tagged outcome into the envelope
    pub fn from_outcome(label: &str, outcome: FetchOutcome<T>) -> Self {
        match outcome {
            Ok(data) => Self::fetched(label, data),
            Err(err) => {
                debug!(resource = label, kind = ?err.kind(), error = %err, "Fetch failed");
                Self::not_found(label)
            }
        }
    }

    /// Whether the fetch succeeded
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status
    }

    /// Take the payload, if any
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Body shape the backend wraps every resource in
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteEnvelope<T> {
    /// The resource itself
    pub data: Option<T>,
}
