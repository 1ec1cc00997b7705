use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::types::{CustomerId, Money, OrderId, PaymentCode, Quantity, WarehouseTag};

/// A single line of an order.
///
/// Unknown fields sent by the storefront (selected specs, source links and
/// the like) are preserved verbatim in `extra` so the stored payload
/// round-trips untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub name: String,
    pub quantity: Quantity,
    pub unit_price: Money,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A customer order. Created once, never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    #[serde(rename = "paopaohuId")]
    pub customer_id: CustomerId,
    pub payment_code: PaymentCode,
    pub total_amount: Money,
    pub items: Vec<OrderItem>,
    pub warehouse: WarehouseTag,
    pub created_at: NaiveDateTime,
}

/// Information required to create a new [`Order`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewOrder {
    pub customer_id: CustomerId,
    pub payment_code: PaymentCode,
    pub total_amount: Money,
    pub items: Vec<OrderItem>,
    pub warehouse: WarehouseTag,
}
