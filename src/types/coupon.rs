use crate::response::{ApiResource, Object};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Coupon {
    pub id: String,
    pub object: Option<String>,
    pub amount_off: Option<i64>,
    pub created: Option<i64>,
    pub currency: Option<String>,
    /// `forever`, `once` or `repeating`.
    pub duration: Option<String>,
    pub duration_in_months: Option<i64>,
    pub livemode: Option<bool>,
    pub max_redemptions: Option<i64>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    pub name: Option<String>,
    pub percent_off: Option<f64>,
    pub redeem_by: Option<i64>,
    pub times_redeemed: Option<i64>,
    pub valid: Option<bool>,
}

impl Object for Coupon {
    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }
}

impl ApiResource for Coupon {
    const PATH: &'static str = "coupons";
}
