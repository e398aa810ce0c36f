//! Error types for the API client
//!
//! Two layers exist. [`ApiError`] covers setting the client up (configuration,
//! building the HTTP stack). [`FetchError`] is the tagged outcome of a single
//! resource fetch; [`crate::envelope::FetchResult`] folds it into the
//! two-outcome envelope that service callers consume.

use crate::transport::TransportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type alias for client setup operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type alias for a single resource fetch
pub type FetchOutcome<T> = Result<T, FetchError>;

/// Client setup errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// The HTTP client could not be built
    #[error("HTTP client setup failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read or parsed
    #[error("Configuration file {path}: {message}")]
    ConfigFile {
        /// Path of the offending file
        path: String,
        /// Reader or parser message
        message: String,
    },
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a configuration file error
    pub fn config_file(path: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::ConfigFile {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// Why a single resource fetch failed
#[derive(Error, Debug)]
pub enum FetchError {
    /// The backend answered 404
    #[error("resource not found (HTTP {status})")]
    NotFound {
        /// HTTP status code
        status: u16,
    },

    /// The backend rejected the credentials (401/403)
    #[error("unauthorized (HTTP {status})")]
    Unauthorized {
        /// HTTP status code
        status: u16,
    },

    /// Any other status than 200
    #[error("unexpected HTTP status {status}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
    },

    /// The request never produced a response
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The bearer token cannot be carried in a header
    #[error("invalid header value: {0}")]
    InvalidHeader(String),

    /// The 200 body was not the expected JSON shape
    #[error("response decoding failed: {0}")]
    Decode(String),

    /// The 200 body had no `data` field
    #[error("response envelope carried no data")]
    MissingData,
}

/// Coarse classification of a [`FetchError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    /// 404
    NotFound,
    /// 401 or 403
    Unauthorized,
    /// Other non-200 status
    Status,
    /// Connection or request failure
    Transport,
    /// Request timed out
    Timeout,
    /// Invalid header, undecodable body or missing payload
    Malformed,
}

impl FetchError {
    /// Classify a non-200 status code
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => Self::NotFound { status },
            401 | 403 => Self::Unauthorized { status },
            _ => Self::UnexpectedStatus { status },
        }
    }

    /// HTTP status code, when the backend answered at all
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { status }
            | Self::Unauthorized { status }
            | Self::UnexpectedStatus { status } => Some(*status),
            Self::Transport(_) | Self::InvalidHeader(_) | Self::Decode(_) | Self::MissingData => {
                None
            }
        }
    }

    /// Coarse error kind
    #[must_use]
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::NotFound { .. } => FetchErrorKind::NotFound,
            Self::Unauthorized { .. } => FetchErrorKind::Unauthorized,
            Self::UnexpectedStatus { .. } => FetchErrorKind::Status,
            Self::Transport(TransportError::Timeout) => FetchErrorKind::Timeout,
            Self::Transport(_) => FetchErrorKind::Transport,
            Self::InvalidHeader(_) | Self::Decode(_) | Self::MissingData => {
                FetchErrorKind::Malformed
            }
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| s >= 500)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
