use crate::response::{ApiResource, Object};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Plan {
    pub id: String,
    pub object: Option<String>,
    pub active: Option<bool>,
    pub amount: Option<i64>,
    pub billing_scheme: Option<String>,
    pub created: Option<i64>,
    pub currency: Option<String>,
    pub interval: Option<String>,
    pub interval_count: Option<i64>,
    pub livemode: Option<bool>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    pub nickname: Option<String>,
    pub product: Option<String>,
    pub trial_period_days: Option<i64>,
    pub usage_type: Option<String>,
}

impl Object for Plan {
    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }
}

impl ApiResource for Plan {
    const PATH: &'static str = "plans";
}
