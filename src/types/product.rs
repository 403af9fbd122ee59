use crate::response::{ApiResource, Object};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    pub id: String,
    pub object: Option<String>,
    pub active: Option<bool>,
    #[serde(default)]
    pub attributes: Vec<String>,
    pub caption: Option<String>,
    pub created: Option<i64>,
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub livemode: Option<bool>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    pub name: Option<String>,
    pub shippable: Option<bool>,
    /// `good` or `service`.
    #[serde(rename = "type")]
    pub type_field: Option<String>,
    pub updated: Option<i64>,
    pub url: Option<String>,
}

impl Object for Product {
    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }
}

impl ApiResource for Product {
    const PATH: &'static str = "products";
}
