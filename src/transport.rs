//! Network collaborators. The rest of the crate only sees [`Request`] and
//! [`RawResponse`]; reqwest lives behind the two transport traits.

use crate::config::Config;
use crate::error::StripeError;
use log::{debug, trace};
use reqwest::Method;
use std::future::Future;

/// One fully-resolved call: verb, path below the base URL, credential,
/// and already-flattened parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub api_key: String,
    pub params: Vec<(String, String)>,
}

/// Status and undecoded body, as handed to response normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Blocking transport.
pub trait Transport {
    fn send(&self, request: &Request) -> Result<RawResponse, StripeError>;
}

/// Asynchronous transport.
pub trait AsyncTransport {
    fn send(&self, request: &Request) -> impl Future<Output = Result<RawResponse, StripeError>> + Send;
}

/// reqwest's blocking client.
#[derive(Clone)]
pub struct BlockingTransport {
    client: reqwest::blocking::Client,
    config: Config,
}

impl BlockingTransport {
    pub fn new(config: &Config) -> Result<Self, StripeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

impl Transport for BlockingTransport {
    fn send(&self, request: &Request) -> Result<RawResponse, StripeError> {
        let url = self.config.url(&request.path);
        debug!("{} {}", request.method, url);
        let builder = self
            .client
            .request(request.method.clone(), url)
            .basic_auth(request.api_key.as_str(), Option::<&str>::None);
        let builder = if request.method == Method::POST {
            builder.form(&request.params)
        } else {
            builder.query(&request.params)
        };
        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        trace!("{} {} -> {} ({} bytes)", request.method, request.path, status, body.len());
        Ok(RawResponse { status, body })
    }
}

/// reqwest's async client.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: Config,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self, StripeError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

impl AsyncTransport for HttpTransport {
    async fn send(&self, request: &Request) -> Result<RawResponse, StripeError> {
        let url = self.config.url(&request.path);
        debug!("{} {}", request.method, url);
        let builder = self
            .client
            .request(request.method.clone(), url)
            .basic_auth(request.api_key.as_str(), Option::<&str>::None);
        let builder = if request.method == Method::POST {
            builder.form(&request.params)
        } else {
            builder.query(&request.params)
        };
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        trace!("{} {} -> {} ({} bytes)", request.method, request.path, status, body.len());
        Ok(RawResponse { status, body })
    }
}
