//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::create_user(&db).await?;
//! let shop = factory::create_shop(&db, owner.id).await?;
//!
//! // Product together with its shop, owner and inventory row
//! let (owner, shop, product) = factory::helpers::create_product_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use entity::sea_orm_active_enums::Role;
//!
//! let seller = factory::user::UserFactory::new(&db)
//!     .username("seller")
//!     .role(Role::Seller)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `shop` - Create shop entities
//! - `category` - Create category entities
//! - `product` - Create product entities along with their inventory row
//! - `discount` - Create discount entities
//! - `seller_request` - Create seller request entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod category;
pub mod discount;
pub mod helpers;
pub mod product;
pub mod seller_request;
pub mod shop;
pub mod user;

pub use category::create_category;
pub use discount::create_discount;
pub use product::create_product;
pub use seller_request::create_seller_request;
pub use shop::create_shop;
pub use user::{create_admin, create_seller, create_user};
