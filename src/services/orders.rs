use validator::Validate;

use crate::domain::order::{NewOrder, Order, OrderItem};
use crate::domain::types::{CustomerId, Money, PaymentCode, WarehouseTag};
use crate::forms::orders::OrderForm;
use crate::repository::{OrderReader, OrderWriter};

use super::{ServiceError, ServiceResult};

/// Sum of `quantity × unit_price` over the items, overflow-checked.
///
/// The original system trusted the client-declared total outright; here the
/// items are the source of truth and the declared value is only checked
/// against them.
fn compute_total(items: &[OrderItem]) -> ServiceResult<Money> {
    let mut total: i64 = 0;
    for item in items {
        let line = i64::from(item.quantity.get()) * i64::from(item.unit_price.get());
        total = total
            .checked_add(line)
            .filter(|t| *t <= i64::from(i32::MAX))
            .ok_or_else(|| ServiceError::Validation("訂單金額超出範圍".to_string()))?;
    }
    Ok(Money::new(total as i32)?)
}

/// Place an order. Open to any caller; no account is required beyond the
/// opaque paopaohu id.
pub fn create_order<R>(form: OrderForm, default_warehouse: &str, repo: &R) -> ServiceResult<Order>
where
    R: OrderWriter,
{
    form.validate()?;

    let computed = compute_total(&form.items)?;
    if computed.get() != form.total_amount {
        return Err(ServiceError::Validation(format!(
            "訂單金額不符: 應為 {computed}, 收到 {}",
            form.total_amount
        )));
    }

    let warehouse = match form.warehouse.as_deref().map(str::trim) {
        Some(tag) if !tag.is_empty() => WarehouseTag::new(tag)?,
        _ => WarehouseTag::new(default_warehouse)?,
    };

    let new_order = NewOrder {
        customer_id: CustomerId::new(form.paopaohu_id)?,
        payment_code: PaymentCode::new(form.payment_code)?,
        total_amount: computed,
        items: form.items,
        warehouse,
    };

    match repo.create_order(&new_order) {
        Ok(order) => Ok(order),
        Err(e) => {
            log::error!("Failed to create order: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// List every order, newest first. Admin enforcement happens at the route
/// boundary; the store itself is privilege-agnostic.
pub fn list_all_orders<R>(repo: &R) -> ServiceResult<Vec<Order>>
where
    R: OrderReader,
{
    match repo.list_orders() {
        Ok(orders) => Ok(orders),
        Err(e) => {
            log::error!("Failed to list orders: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// List a customer's own orders, newest first. The id is the only proof of
/// identity the system has. An id no stored order could carry, such as a
/// blank one, matches nothing rather than failing the lookup.
pub fn list_customer_orders<R>(paopaohu_id: &str, repo: &R) -> ServiceResult<Vec<Order>>
where
    R: OrderReader,
{
    let Ok(customer_id) = CustomerId::new(paopaohu_id) else {
        return Ok(Vec::new());
    };

    match repo.list_orders_for_customer(&customer_id) {
        Ok(orders) => Ok(orders),
        Err(e) => {
            log::error!("Failed to list orders for {customer_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Quantity;
    use crate::repository::test::TestRepository;
    use serde_json::{Map, json};

    const DEFAULT_WAREHOUSE: &str = "深圳倉";

    fn item(name: &str, quantity: i32, unit_price: i32) -> OrderItem {
        OrderItem {
            name: name.to_string(),
            quantity: Quantity::new(quantity).unwrap(),
            unit_price: Money::new(unit_price).unwrap(),
            extra: Map::new(),
        }
    }

    fn sample_form() -> OrderForm {
        OrderForm {
            paopaohu_id: "PH-1007".to_string(),
            payment_code: "TX-20260829".to_string(),
            total_amount: 750,
            items: vec![item("保溫杯", 2, 350), item("貼紙", 1, 50)],
            warehouse: None,
        }
    }

    #[test]
    fn creates_order_with_default_warehouse() {
        let repo = TestRepository::new();
        let order = create_order(sample_form(), DEFAULT_WAREHOUSE, &repo).unwrap();
        assert_eq!(order.warehouse, DEFAULT_WAREHOUSE);
        assert_eq!(order.total_amount, 750);
    }

    #[test]
    fn keeps_caller_supplied_warehouse() {
        let repo = TestRepository::new();
        let form = OrderForm {
            warehouse: Some("義烏倉".to_string()),
            ..sample_form()
        };
        let order = create_order(form, DEFAULT_WAREHOUSE, &repo).unwrap();
        assert_eq!(order.warehouse, "義烏倉");
    }

    #[test]
    fn rejects_mismatched_declared_totals() {
        let repo = TestRepository::new();
        let form = OrderForm {
            total_amount: 9999,
            ..sample_form()
        };
        let result = create_order(form, DEFAULT_WAREHOUSE, &repo);
        assert!(matches!(result, Err(ServiceError::Validation(_))));
        assert!(list_all_orders(&repo).unwrap().is_empty());
    }

    #[test]
    fn rejects_empty_item_lists() {
        let repo = TestRepository::new();
        let form = OrderForm {
            items: vec![],
            total_amount: 0,
            ..sample_form()
        };
        let result = create_order(form, DEFAULT_WAREHOUSE, &repo);
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn items_round_trip_with_extra_fields() {
        let repo = TestRepository::new();
        let mut extra = Map::new();
        extra.insert("specs".to_string(), json!({"顏色": "太空黑"}));
        extra.insert("sourceUrl".to_string(), json!("https://detail.1688.com/offer/1.html"));
        let form = OrderForm {
            items: vec![OrderItem {
                name: "藍牙耳機".to_string(),
                quantity: Quantity::new(2).unwrap(),
                unit_price: Money::new(225).unwrap(),
                extra,
            }],
            total_amount: 450,
            ..sample_form()
        };
        create_order(form, DEFAULT_WAREHOUSE, &repo).unwrap();

        let orders = list_customer_orders("PH-1007", &repo).unwrap();
        assert_eq!(orders.len(), 1);
        let item = &orders[0].items[0];
        assert_eq!(item.extra["specs"]["顏色"], "太空黑");
        assert_eq!(orders[0].total_amount, 450);
    }

    #[test]
    fn blank_customer_ids_match_no_orders() {
        let repo = TestRepository::new();
        create_order(sample_form(), DEFAULT_WAREHOUSE, &repo).unwrap();

        assert_eq!(list_customer_orders("   ", &repo).unwrap(), vec![]);
        assert_eq!(list_customer_orders("", &repo).unwrap(), vec![]);
    }

    #[test]
    fn customers_only_see_their_own_orders() {
        let repo = TestRepository::new();
        create_order(sample_form(), DEFAULT_WAREHOUSE, &repo).unwrap();
        let other = OrderForm {
            paopaohu_id: "PH-2000".to_string(),
            ..sample_form()
        };
        create_order(other, DEFAULT_WAREHOUSE, &repo).unwrap();

        let mine = list_customer_orders("PH-1007", &repo).unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].customer_id, "PH-1007");
        assert_eq!(list_all_orders(&repo).unwrap().len(), 2);
    }
}
