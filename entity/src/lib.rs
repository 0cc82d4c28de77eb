//! SeaORM entity definitions for the marketplace schema.
//!
//! One module per table. Enumerated string columns live in
//! `sea_orm_active_enums` and are shared between entities.

pub mod prelude;

pub mod category;
pub mod discount;
pub mod inventory;
pub mod product;
pub mod product_category;
pub mod sea_orm_active_enums;
pub mod seller_request;
pub mod shop;
pub mod user;
