//! Core library for the paopao-shop order-management backend.
//!
//! This crate exposes the domain model, Diesel repositories, request forms,
//! routes and service layers used by the storefront API server.

pub mod auth;
pub mod db;
pub mod domain;
pub mod forms;
pub mod importer;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;
pub mod uploads;
