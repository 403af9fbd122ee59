//! Error types shared by every resource.

use serde::{Deserialize, Serialize};

/// Decoded Stripe error payload, plus the HTTP status it arrived with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// HTTP status code of the response.
    #[serde(default)]
    pub status: u16,
    /// Stripe error type, e.g. `invalid_request_error`.
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
    /// Machine-readable code, e.g. `resource_missing`.
    #[serde(default)]
    pub code: Option<String>,
    /// Offending parameter, when Stripe names one.
    #[serde(default)]
    pub param: Option<String>,
}

/// Error envelope Stripe wraps every non-2xx body in.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ApiError,
}

/// Errors returned by single-resource operations.
#[derive(Debug, thiserror::Error)]
pub enum StripeError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport fault raised by a non-reqwest transport.
    #[error("transport error: {0}")]
    Transport(String),

    /// Stripe answered with a non-2xx status.
    #[error("Stripe API error ({}): {}", .0.status, .0.message)]
    Api(ApiError),

    /// Response body could not be decoded into the expected shape.
    #[error("decode error (status {status}): {source}")]
    Decode {
        /// HTTP status code of the undecodable response.
        status: u16,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// Missing or invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl StripeError {
    /// The decoded API error, if Stripe returned one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// `true` for network-level faults, as opposed to API or decode errors.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Transport(_))
    }
}

/// Raised by the bulk helpers (`all`, `count`, `delete_all`) when a listing
/// request fails. Partial results are dropped.
#[derive(Debug, thiserror::Error)]
pub enum BulkError {
    /// A page request failed.
    #[error("listing aborted after {fetched} items (cursor {cursor:?}): {source}")]
    Listing {
        /// Items accumulated before the failure.
        fetched: usize,
        /// Cursor the failing request started after.
        cursor: String,
        /// Error of the failing page request.
        #[source]
        source: StripeError,
    },
}

impl BulkError {
    /// Error of the page request that aborted the walk.
    pub fn source_error(&self) -> &StripeError {
        match self {
            Self::Listing { source, .. } => source,
        }
    }
}

/// Outcome of a `delete_all` run. Individual delete failures do not stop
/// the run; they are collected here.
#[derive(Debug, Default)]
pub struct DeleteReport {
    /// Ids deleted successfully.
    pub deleted: Vec<String>,
    /// Ids whose delete failed, with the error.
    pub failed: Vec<(String, StripeError)>,
}

impl DeleteReport {
    /// Number of delete requests issued.
    pub fn attempted(&self) -> usize {
        self.deleted.len() + self.failed.len()
    }

    /// `true` when every delete succeeded.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}
