//! HTTP request handlers.
//!
//! Each handler authenticates through the `Credentials` extractor, checks access with
//! `AuthGuard` and `Permission`, converts DTOs to parameters, calls a service and maps
//! the resulting domain model back to a DTO. Every handler carries a `utoipa::path`
//! annotation from which the OpenAPI document is generated.

pub mod auth;
pub mod category;
pub mod discount;
pub mod product;
pub mod seller_request;
pub mod shop;
pub mod user;

#[cfg(test)]
mod test;
