//! Response normalization and the envelopes shared by all resources.

use crate::error::{ApiError, ErrorEnvelope, StripeError};
use crate::transport::RawResponse;
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Anything Stripe hands back with an `id`.
pub trait Object: DeserializeOwned {
    fn id(&self) -> Option<&str>;
}

/// A typed resource living under a fixed base path.
pub trait ApiResource: Object {
    const PATH: &'static str;
}

impl Object for Value {
    fn id(&self) -> Option<&str> {
        self.get("id").and_then(Value::as_str)
    }
}

/// One batch of a cursor-paginated list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<R> {
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub has_more: bool,
    pub data: Vec<R>,
}

impl<R: Object> Page<R> {
    /// Id of the last item, used as `starting_after` for the next page.
    pub fn cursor(&self) -> Option<&str> {
        self.data.last().and_then(Object::id)
    }
}

impl<R> Page<R> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Confirmation returned by DELETE.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    pub id: String,
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub deleted: bool,
}

impl Object for Deleted {
    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }
}

/// 2xx bodies decode into `R`; anything else becomes [`StripeError::Api`].
/// Bodies that fit neither shape are [`StripeError::Decode`].
pub fn handle_stripe_response<R: DeserializeOwned>(response: RawResponse) -> Result<R, StripeError> {
    let RawResponse { status, body } = response;
    if (200..300).contains(&status) {
        return serde_json::from_str(&body).map_err(|source| StripeError::Decode { status, source });
    }
    let envelope: ErrorEnvelope =
        serde_json::from_str(&body).map_err(|source| StripeError::Decode { status, source })?;
    let error = ApiError {
        status,
        ..envelope.error
    };
    debug!(
        "Stripe returned {}: {} ({})",
        status,
        error.message,
        error.code.as_deref().unwrap_or("no code")
    );
    Err(StripeError::Api(error))
}
