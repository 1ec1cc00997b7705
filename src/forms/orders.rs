use serde::Deserialize;
use validator::Validate;

use crate::domain::order::OrderItem;

/// Payload for placing an order. `total_amount` is the caller's declared
/// total; the service recomputes it from the items and rejects mismatches.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderForm {
    #[serde(rename = "paopaohuId")]
    #[validate(length(min = 1))]
    pub paopaohu_id: String,
    #[validate(length(min = 1))]
    pub payment_code: String,
    pub total_amount: i32,
    #[validate(length(min = 1))]
    pub items: Vec<OrderItem>,
    pub warehouse: Option<String>,
}
