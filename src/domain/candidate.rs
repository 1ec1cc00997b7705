use serde::{Deserialize, Serialize};

use crate::domain::types::{ImageUrl, Money, Quantity, SourceUrl};

/// One selectable spec dimension of an imported listing, e.g. colour or
/// bundle, with its option labels in source order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpecGroup {
    #[serde(rename = "type")]
    pub label: String,
    pub options: Vec<String>,
}

/// An unsaved product description produced by the importer, pending
/// administrator review before becoming a catalog product.
///
/// `price_local` is the only price ever surfaced to customers; conversion
/// from the source currency happens exactly once, at import time. The wire
/// field names match what the storefront already consumes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExternalProductCandidate {
    #[serde(rename = "id")]
    pub external_id: String,
    pub name: String,
    #[serde(rename = "imageUrl")]
    pub image_url: ImageUrl,
    #[serde(rename = "price")]
    pub price_local: Money,
    pub min_quantity: Quantity,
    pub specs: Vec<SpecGroup>,
    #[serde(rename = "original_url")]
    pub source_url: SourceUrl,
}
