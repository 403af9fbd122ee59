use crate::error::StripeError;
use dotenvy::dotenv;
use log::{debug, warn};
use std::{env as stdenv, time::Duration};

pub const DEFAULT_BASE_URL: &str = "https://api.stripe.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration. The API key here is the default credential used
/// whenever a call does not supply one explicitly.
#[derive(Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Reads `STRIPE_SECRET_KEY`, and optionally `STRIPE_API_BASE` and
    /// `STRIPE_TIMEOUT_SECS`, from the environment or a `.env` file.
    pub fn from_env() -> Result<Self, StripeError> {
        if dotenv().is_err() {
            debug!(".env file not found, using process environment only");
        }
        let api_key = stdenv::var("STRIPE_SECRET_KEY").map_err(|_| {
            StripeError::Configuration("STRIPE_SECRET_KEY not set in environment or .env".to_string())
        })?;
        if !api_key.starts_with("sk_") && !api_key.starts_with("rk_") {
            warn!("STRIPE_SECRET_KEY does not look like a secret or restricted key");
        }

        let mut config = Self::new().with_api_key(api_key);
        if let Ok(base_url) = stdenv::var("STRIPE_API_BASE") {
            config = config.with_base_url(base_url);
        }
        if let Ok(secs) = stdenv::var("STRIPE_TIMEOUT_SECS") {
            let secs = secs.trim().parse::<u64>().map_err(|e| {
                StripeError::Configuration(format!("STRIPE_TIMEOUT_SECS is not a number: {}", e))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL for a resource path such as `orders/or_123/pay`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Picks the explicit credential when given, else the configured one.
    pub fn resolve_key<'a>(&'a self, explicit: Option<&'a str>) -> Result<&'a str, StripeError> {
        explicit
            .or(self.api_key.as_deref())
            .ok_or_else(|| StripeError::Configuration("no API key configured and none supplied".to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

// Keeps secrets out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "sk_***"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
