use crate::config::Config;
use crate::error::StripeError;
use crate::resource::Resource;
use crate::response::{handle_stripe_response, ApiResource};
use crate::transport::{AsyncTransport, BlockingTransport, HttpTransport, Request, Transport};
use reqwest::Method;
use serde::de::DeserializeOwned;

/// Entry point. Holds the configuration (default credential included) and
/// the transport every request goes through.
#[derive(Clone)]
pub struct StripeClient<T = BlockingTransport> {
    config: Config,
    transport: T,
}

impl StripeClient<BlockingTransport> {
    /// Blocking client over reqwest.
    pub fn new(config: Config) -> Result<Self, StripeError> {
        let transport = BlockingTransport::new(&config)?;
        Ok(Self { config, transport })
    }

    /// Blocking client configured from `STRIPE_SECRET_KEY` / `.env`.
    pub fn from_env() -> Result<Self, StripeError> {
        Self::new(Config::from_env()?)
    }
}

impl StripeClient<HttpTransport> {
    /// Async client over reqwest.
    pub fn new_async(config: Config) -> Result<Self, StripeError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }
}

impl<T> StripeClient<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Generic resource client for any typed resource.
    pub fn resource<R: ApiResource>(&self) -> Resource<'_, R, T> {
        Resource::new(self, R::PATH)
    }

    /// Resolves the credential and assembles a transport request.
    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        api_key: Option<&str>,
        params: Vec<(String, String)>,
    ) -> Result<Request, StripeError> {
        let api_key = self.config.resolve_key(api_key)?.to_string();
        Ok(Request {
            method,
            path: path.to_string(),
            api_key,
            params,
        })
    }
}

impl<T: Transport> StripeClient<T> {
    /// Sends one request and normalizes the response.
    pub fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        api_key: Option<&str>,
        params: Vec<(String, String)>,
    ) -> Result<R, StripeError> {
        let request = self.build_request(method, path, api_key, params)?;
        let response = self.transport.send(&request)?;
        handle_stripe_response(response)
    }
}

impl<T: AsyncTransport> StripeClient<T> {
    pub async fn async_request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        api_key: Option<&str>,
        params: Vec<(String, String)>,
    ) -> Result<R, StripeError> {
        let request = self.build_request(method, path, api_key, params)?;
        let response = self.transport.send(&request).await?;
        handle_stripe_response(response)
    }
}
