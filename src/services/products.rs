use validator::Validate;

use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductId;
use crate::forms::products::ProductForm;
use crate::repository::{ProductReader, ProductWriter};

use super::{ServiceError, ServiceResult};

/// List the catalog, newest first. Open to any caller.
pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader,
{
    match repo.list_products() {
        Ok(products) => Ok(products),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Create a catalog product from an admin-submitted form.
pub fn create_product<R>(form: ProductForm, repo: &R) -> ServiceResult<Product>
where
    R: ProductWriter,
{
    form.validate()?;
    let new_product: NewProduct = form.try_into()?;

    match repo.create_product(&new_product) {
        Ok(product) => Ok(product),
        Err(e) => {
            log::error!("Failed to create product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Replace all fields of an existing product.
pub fn update_product<R>(id: i32, form: ProductForm, repo: &R) -> ServiceResult<Product>
where
    R: ProductWriter,
{
    form.validate()?;
    let id = ProductId::new(id).map_err(|_| ServiceError::NotFound)?;
    let update: NewProduct = form.try_into()?;

    match repo.update_product(id, &update) {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update product {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Delete a product. Deleting an unknown id succeeds; the observed
/// behavior is "delete always succeeds" and callers rely on it.
pub fn delete_product<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: ProductWriter,
{
    let Ok(id) = ProductId::new(id) else {
        return Ok(());
    };

    match repo.delete_product(id) {
        Ok(_affected) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete product {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}
