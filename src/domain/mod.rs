//! Domain entities and constrained value objects.

pub mod admin;
pub mod candidate;
pub mod order;
pub mod product;
pub mod types;
