use serde::Deserialize;
use validator::Validate;

use crate::domain::product::NewProduct;
use crate::domain::types::{ImageUrl, Money, ProductName, TypeConstraintError};

/// Payload for creating or fully replacing a catalog product.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub image_url: Option<String>,
    #[validate(range(min = 0))]
    pub base_price: i32,
    #[validate(range(min = 0))]
    pub service_fee: i32,
}

impl TryFrom<ProductForm> for NewProduct {
    type Error = TypeConstraintError;

    fn try_from(form: ProductForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: ProductName::new(form.name)?,
            image_url: form
                .image_url
                .filter(|url| !url.trim().is_empty())
                .map(ImageUrl::new)
                .transpose()?,
            base_price: Money::new(form.base_price)?,
            service_fee: Money::new(form.service_fee)?,
        })
    }
}
