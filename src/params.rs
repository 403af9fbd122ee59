//! Parameter sets and their form encoding.
//!
//! Stripe takes `application/x-www-form-urlencoded` bodies with nested
//! keys spelled `metadata[order]` and lists spelled `items[0][parent]`.

use crate::error::StripeError;
use reqwest::Url;
use serde_json::{Map, Value};

/// Ordered mapping from keys to scalar, list, or nested values. Nothing
/// about its shape is checked locally.
pub type Params = Map<String, Value>;

/// Turns a `json!({...})` literal into [`Params`].
pub fn from_value(value: Value) -> Result<Params, StripeError> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Params::new()),
        other => Err(StripeError::Configuration(format!(
            "parameters must be a JSON object, got {}",
            other
        ))),
    }
}

/// Flattens a parameter set into form pairs, keeping insertion order.
pub fn encode(params: &Params) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in params {
        push_value(&mut pairs, key.clone(), value);
    }
    pairs
}

fn push_value(pairs: &mut Vec<(String, String)>, key: String, value: &Value) {
    match value {
        Value::Null => pairs.push((key, String::new())),
        Value::Bool(b) => pairs.push((key, b.to_string())),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::String(s) => pairs.push((key, s.clone())),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                push_value(pairs, format!("{}[{}]", key, i), item);
            }
        }
        Value::Object(map) => {
            for (sub, item) in map {
                push_value(pairs, format!("{}[{}]", key, sub), item);
            }
        }
    }
}

/// Percent-encodes an opaque id so it stays a single path segment.
pub fn path_segment(id: &str) -> String {
    let Ok(mut url) = Url::parse("http://localhost/") else {
        return id.to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push(id);
    }
    url.path().trim_start_matches('/').to_string()
}

/// `<base>/<id>` with the id encoded.
pub fn item_path(base: &str, id: &str) -> String {
    format!("{}/{}", base, path_segment(id))
}

/// Query pairs for one page request. An empty cursor means "newest first"
/// and is left out.
pub fn page_query(cursor: &str, limit: u32) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(2);
    if !cursor.is_empty() {
        pairs.push(("starting_after".to_string(), cursor.to_string()));
    }
    pairs.push(("limit".to_string(), limit.to_string()));
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn nested_maps_and_lists_use_bracket_keys() {
        let params = from_value(json!({
            "currency": "usd",
            "items": [{"type": "sku", "parent": "sku_1", "quantity": 2}],
            "metadata": {"cart": "c_9"},
            "livemode": false
        }))
        .unwrap();

        assert_eq!(
            encode(&params),
            pairs(&[
                ("currency", "usd"),
                ("items[0][type]", "sku"),
                ("items[0][parent]", "sku_1"),
                ("items[0][quantity]", "2"),
                ("metadata[cart]", "c_9"),
                ("livemode", "false"),
            ])
        );
    }

    #[test]
    fn null_clears_a_field() {
        let params = from_value(json!({"metadata": {"old": null}})).unwrap();
        assert_eq!(encode(&params), pairs(&[("metadata[old]", "")]));
    }

    #[test]
    fn non_object_parameters_are_rejected() {
        assert!(from_value(json!([1, 2])).is_err());
        assert!(from_value(Value::Null).unwrap().is_empty());
    }

    #[test]
    fn reserved_characters_in_ids_are_escaped() {
        assert_eq!(item_path("coupons", "SPRING25"), "coupons/SPRING25");
        assert_eq!(item_path("coupons", "spring?sale"), "coupons/spring%3Fsale");
        assert_eq!(item_path("coupons", "a/b#c"), "coupons/a%2Fb%23c");
        assert_eq!(item_path("coupons", "50%off"), "coupons/50%25off");
    }

    #[test]
    fn empty_cursor_is_omitted_and_zero_limit_kept() {
        assert_eq!(page_query("", 0), pairs(&[("limit", "0")]));
        assert_eq!(
            page_query("cu_42", 100),
            pairs(&[("starting_after", "cu_42"), ("limit", "100")])
        );
    }
}
