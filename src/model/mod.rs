//! Wire-format data transfer objects for the HTTP API.
//!
//! DTOs are what clients send and receive. They carry serde and OpenAPI schema
//! derives and, for request bodies, the field-level validation rules. Server-side
//! domain models convert to and from these types at the controller boundary.

pub mod api;
pub mod auth;
pub mod category;
pub mod discount;
pub mod product;
pub mod seller_request;
pub mod shop;
pub mod user;
