use serde::{Deserialize, Serialize};

use crate::domain::types::{ImageUrl, Money, ProductId, ProductName};

/// A catalog product managed by the administrator.
///
/// Orders copy product data at creation time, so later edits or deletions
/// never touch historical orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub image_url: Option<ImageUrl>,
    pub base_price: Money,
    pub service_fee: Money,
}

/// Information required to create a new [`Product`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub name: ProductName,
    pub image_url: Option<ImageUrl>,
    pub base_price: Money,
    pub service_fee: Money,
}
