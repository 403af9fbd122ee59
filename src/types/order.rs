use crate::response::{ApiResource, Object};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Order {
    pub id: String,
    pub object: Option<String>,
    pub amount: Option<i64>,
    pub amount_returned: Option<i64>,
    pub application: Option<String>,
    pub application_fee: Option<i64>,
    pub charge: Option<String>,
    pub created: Option<i64>,
    pub currency: Option<String>,
    pub customer: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub livemode: Option<bool>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    pub selected_shipping_method: Option<String>,
    pub shipping: Option<Value>,
    pub status: Option<String>,
    pub status_transitions: Option<StatusTransitions>,
    pub updated: Option<i64>,
    pub upstream_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderItem {
    pub object: Option<String>,
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub parent: Option<String>,
    pub quantity: Option<i64>,
    #[serde(rename = "type")]
    pub type_field: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StatusTransitions {
    pub canceled: Option<i64>,
    // spelled this way by Stripe
    pub fulfiled: Option<i64>,
    pub paid: Option<i64>,
    pub returned: Option<i64>,
}

/// Result of `POST orders/{id}/returns`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderReturn {
    pub id: String,
    pub object: Option<String>,
    pub amount: Option<i64>,
    pub created: Option<i64>,
    pub currency: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub livemode: Option<bool>,
    pub order: Option<String>,
    pub refund: Option<String>,
}

impl Order {
    pub fn is_paid(&self) -> bool {
        matches!(self.status.as_deref(), Some("paid") | Some("fulfilled"))
    }
}

impl Object for Order {
    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }
}

impl ApiResource for Order {
    const PATH: &'static str = "orders";
}

impl Object for OrderReturn {
    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }
}
