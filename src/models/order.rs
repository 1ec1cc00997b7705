use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{NewOrder as DomainNewOrder, Order as DomainOrder, OrderItem};
use crate::domain::types::{
    CustomerId, Money, OrderId, PaymentCode, TypeConstraintError, WarehouseTag,
};

/// Diesel representation of an order row. Items are stored as an opaque
/// JSON blob in `items_json`.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: i32,
    pub paopaohu_id: String,
    pub payment_code: String,
    pub total_amount: i32,
    pub items_json: String,
    pub warehouse: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<Order> for DomainOrder {
    type Error = TypeConstraintError;

    fn try_from(order: Order) -> Result<Self, Self::Error> {
        let items: Vec<OrderItem> = serde_json::from_str(&order.items_json)
            .map_err(|e| TypeConstraintError::InvalidValue(format!("order items payload: {e}")))?;
        Ok(Self {
            id: OrderId::new(order.id)?,
            customer_id: CustomerId::new(order.paopaohu_id)?,
            payment_code: PaymentCode::new(order.payment_code)?,
            total_amount: Money::new(order.total_amount)?,
            items,
            warehouse: WarehouseTag::new(order.warehouse)?,
            created_at: order.created_at,
        })
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder {
    pub paopaohu_id: String,
    pub payment_code: String,
    pub total_amount: i32,
    pub items_json: String,
    pub warehouse: String,
}

impl TryFrom<DomainNewOrder> for NewOrder {
    type Error = TypeConstraintError;

    fn try_from(order: DomainNewOrder) -> Result<Self, Self::Error> {
        let items_json = serde_json::to_string(&order.items)
            .map_err(|e| TypeConstraintError::InvalidValue(format!("order items payload: {e}")))?;
        Ok(Self {
            paopaohu_id: order.customer_id.into_inner(),
            payment_code: order.payment_code.into_inner(),
            total_amount: order.total_amount.get(),
            items_json,
            warehouse: order.warehouse.into_inner(),
        })
    }
}
