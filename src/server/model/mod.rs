//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod category;
pub mod discount;
pub mod product;
pub mod seller_request;
pub mod shop;
pub mod user;
