use crate::response::{ApiResource, Object};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Sku {
    pub id: String,
    pub object: Option<String>,
    pub active: Option<bool>,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    pub created: Option<i64>,
    pub currency: Option<String>,
    pub image: Option<String>,
    pub inventory: Option<Inventory>,
    pub livemode: Option<bool>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    pub price: Option<i64>,
    pub product: Option<String>,
    pub updated: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Inventory {
    pub quantity: Option<i64>,
    /// `finite`, `bucket` or `infinite`.
    #[serde(rename = "type")]
    pub type_field: Option<String>,
    pub value: Option<String>,
}

impl Object for Sku {
    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }
}

impl ApiResource for Sku {
    const PATH: &'static str = "skus";
}
