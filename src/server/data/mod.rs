//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Operations that write more than one table run inside a single transaction owned by
//! the repository method.

pub mod category;
pub mod discount;
pub mod inventory;
pub mod product;
pub mod seller_request;
pub mod shop;
pub mod user;

#[cfg(test)]
mod test;
