//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use entity::sea_orm_active_enums::Role;
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{product::ProductFactory, shop::ShopFactory, user::UserFactory};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to derive unique usernames, shop names, category names and discount codes
/// so that unique constraints never collide between factory calls.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a seller, a shop owned by them, and a product in that shop.
///
/// # Returns
/// - `Ok((seller, shop, product))` - The created entities
/// - `Err(DbErr)` - Database error during any insert
pub async fn create_product_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::shop::Model,
        entity::product::Model,
    ),
    DbErr,
> {
    let seller = UserFactory::new(db).role(Role::Seller).build().await?;
    let shop = ShopFactory::new(db, seller.id).build().await?;
    let product = ProductFactory::new(db, shop.id).build().await?;

    Ok((seller, shop, product))
}
