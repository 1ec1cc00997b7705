use diesel::prelude::*;

use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};
use crate::domain::types::{ImageUrl, Money, ProductId, ProductName, TypeConstraintError};

/// Diesel representation of a product row.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub image_url: Option<String>,
    pub base_price: i32,
    pub service_fee: i32,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::new(product.id)?,
            name: ProductName::new(product.name)?,
            image_url: product.image_url.map(ImageUrl::new).transpose()?,
            base_price: Money::new(product.base_price)?,
            service_fee: Money::new(product.service_fee)?,
        })
    }
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
pub struct NewProduct {
    pub name: String,
    pub image_url: Option<String>,
    pub base_price: i32,
    pub service_fee: i32,
}

impl From<DomainNewProduct> for NewProduct {
    fn from(product: DomainNewProduct) -> Self {
        Self {
            name: product.name.into_inner(),
            image_url: product.image_url.map(ImageUrl::into_inner),
            base_price: product.base_price.get(),
            service_fee: product.service_fee.get(),
        }
    }
}
