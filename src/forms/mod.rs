//! Deserializable request payloads and their validation rules.

pub mod auth;
pub mod imports;
pub mod orders;
pub mod products;
