use crate::db::{DbConnection, DbPool};
use crate::domain::admin::AdminUser;
use crate::domain::order::{NewOrder, Order};
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::{CustomerId, ProductId};

pub mod admin;
pub mod errors;
pub mod order;
pub mod product;
#[cfg(test)]
pub mod test;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for catalog products.
pub trait ProductReader {
    /// List all products, newest first.
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
}

/// Write operations for catalog products. Privilege checks belong to the
/// caller; the store itself is privilege-agnostic.
pub trait ProductWriter {
    /// Persist a new product and return the stored row.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product>;
    /// Replace all mutable fields of a product. `None` if the id is unknown.
    fn update_product(
        &self,
        id: ProductId,
        update: &NewProduct,
    ) -> RepositoryResult<Option<Product>>;
    /// Delete a product, returning the number of affected rows. Deleting an
    /// unknown id affects zero rows and is not an error.
    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize>;
}

/// Read-only operations for orders.
pub trait OrderReader {
    /// List every order, newest first.
    fn list_orders(&self) -> RepositoryResult<Vec<Order>>;
    /// List orders belonging to one customer, newest first.
    fn list_orders_for_customer(&self, customer_id: &CustomerId) -> RepositoryResult<Vec<Order>>;
}

/// Write operations for orders. Orders are append-only.
pub trait OrderWriter {
    /// Persist a new order and return the stored row.
    fn create_order(&self, order: &NewOrder) -> RepositoryResult<Order>;
}

/// Read-only operations for administrator accounts.
pub trait AdminReader {
    /// Retrieve an administrator by username.
    fn get_admin_by_username(&self, username: &str) -> RepositoryResult<Option<AdminUser>>;
}

/// Write operations for administrator accounts.
pub trait AdminWriter {
    /// Persist a new administrator with an already-hashed password.
    fn create_admin(&self, username: &str, password_hash: &str) -> RepositoryResult<usize>;
}
