#![allow(dead_code)]

use paystripe::Config;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const DEFAULT_KEY: &str = "sk_test_default";
// base64("sk_test_default:")
pub const DEFAULT_AUTH: &str = "Basic c2tfdGVzdF9kZWZhdWx0Og==";
pub const CONNECTED_KEY: &str = "sk_test_connected";
// base64("sk_test_connected:")
pub const CONNECTED_AUTH: &str = "Basic c2tfdGVzdF9jb25uZWN0ZWQ6";

pub fn config(server: &MockServer) -> Config {
    Config::new()
        .with_api_key(DEFAULT_KEY)
        .with_base_url(format!("{}/v1", server.uri()))
}

pub fn page(object: &str, prefix: &str, size: usize, has_more: bool) -> Value {
    let data: Vec<Value> = (0..size)
        .map(|i| json!({"id": format!("{}_{}", prefix, i), "object": object}))
        .collect();
    json!({"object": "list", "url": format!("/v1/{}s", object), "has_more": has_more, "data": data})
}

pub fn stripe_error(kind: &str, message: &str, code: &str) -> Value {
    json!({"error": {"type": kind, "message": message, "code": code}})
}
