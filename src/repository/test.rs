use std::sync::Mutex;

use chrono::Utc;

use crate::domain::admin::AdminUser;
use crate::domain::order::{NewOrder, Order};
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::{CustomerId, OrderId, ProductId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AdminReader, AdminWriter, OrderReader, OrderWriter, ProductReader, ProductWriter,
};

/// Simple in-memory repository used for unit tests.
#[derive(Default)]
pub struct TestRepository {
    products: Mutex<Vec<Product>>,
    orders: Mutex<Vec<Order>>,
    admins: Mutex<Vec<AdminUser>>,
}

impl TestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_admin(username: &str, password_hash: &str) -> Self {
        let repo = Self::default();
        repo.admins.lock().expect("lock").push(AdminUser {
            id: 1,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        });
        repo
    }
}

impl ProductReader for TestRepository {
    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        let mut items = self.products.lock().expect("lock").clone();
        items.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(items)
    }
}

impl ProductWriter for TestRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product> {
        let mut products = self.products.lock().expect("lock");
        let id = products.iter().map(|p| p.id.get()).max().unwrap_or(0) + 1;
        let stored = Product {
            id: ProductId::new(id)?,
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            base_price: product.base_price,
            service_fee: product.service_fee,
        };
        products.push(stored.clone());
        Ok(stored)
    }

    fn update_product(
        &self,
        id: ProductId,
        update: &NewProduct,
    ) -> RepositoryResult<Option<Product>> {
        let mut products = self.products.lock().expect("lock");
        match products.iter_mut().find(|p| p.id == id) {
            Some(existing) => {
                existing.name = update.name.clone();
                existing.image_url = update.image_url.clone();
                existing.base_price = update.base_price;
                existing.service_fee = update.service_fee;
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize> {
        let mut products = self.products.lock().expect("lock");
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(before - products.len())
    }
}

impl OrderReader for TestRepository {
    fn list_orders(&self) -> RepositoryResult<Vec<Order>> {
        let mut items = self.orders.lock().expect("lock").clone();
        items.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(items)
    }

    fn list_orders_for_customer(&self, customer_id: &CustomerId) -> RepositoryResult<Vec<Order>> {
        let mut items = self.list_orders()?;
        items.retain(|o| &o.customer_id == customer_id);
        Ok(items)
    }
}

impl OrderWriter for TestRepository {
    fn create_order(&self, order: &NewOrder) -> RepositoryResult<Order> {
        let mut orders = self.orders.lock().expect("lock");
        let id = orders.iter().map(|o| o.id.get()).max().unwrap_or(0) + 1;
        let stored = Order {
            id: OrderId::new(id)?,
            customer_id: order.customer_id.clone(),
            payment_code: order.payment_code.clone(),
            total_amount: order.total_amount,
            items: order.items.clone(),
            warehouse: order.warehouse.clone(),
            created_at: Utc::now().naive_utc(),
        };
        orders.push(stored.clone());
        Ok(stored)
    }
}

impl AdminReader for TestRepository {
    fn get_admin_by_username(&self, username: &str) -> RepositoryResult<Option<AdminUser>> {
        Ok(self
            .admins
            .lock()
            .expect("lock")
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }
}

impl AdminWriter for TestRepository {
    fn create_admin(&self, username: &str, password_hash: &str) -> RepositoryResult<usize> {
        let mut admins = self.admins.lock().expect("lock");
        let id = admins.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        admins.push(AdminUser {
            id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        });
        Ok(1)
    }
}
