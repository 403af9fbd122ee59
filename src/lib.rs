//! Stripe REST resources as plain function calls.
//!
//! ```no_run
//! use paystripe::{params, StripeClient};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = StripeClient::from_env()?;
//! let coupon = client.coupons().create(&params::from_value(json!({
//!     "percent_off": 25,
//!     "duration": "once"
//! }))?)?;
//! let total = client.coupons().count()?;
//! println!("{} created, {} coupons in total", coupon.id, total);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod params;
pub mod resource;
pub mod response;
pub mod stripe;
pub mod transport;
pub mod types;
pub mod util;

pub use client::StripeClient;
pub use config::Config;
pub use error::{ApiError, BulkError, DeleteReport, StripeError};
pub use params::Params;
pub use resource::Resource;
pub use response::{handle_stripe_response, ApiResource, Deleted, Object, Page};
pub use transport::{AsyncTransport, BlockingTransport, HttpTransport, RawResponse, Request, Transport};
