//! Diesel row representations and server configuration.

pub mod admin;
pub mod config;
pub mod order;
pub mod product;
