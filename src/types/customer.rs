use crate::response::{ApiResource, Object};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Customer {
    pub id: String,
    pub object: Option<String>,
    pub balance: Option<i64>,
    pub created: Option<i64>,
    pub currency: Option<String>,
    pub default_source: Option<String>,
    pub delinquent: Option<bool>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub invoice_prefix: Option<String>,
    pub livemode: Option<bool>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub tax_exempt: Option<String>,
}

impl Object for Customer {
    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }
}

impl ApiResource for Customer {
    const PATH: &'static str = "customers";
}
