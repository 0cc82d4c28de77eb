//! Shop factory for creating test shop entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test shops owned by a given user.
///
/// # Example
///
/// ```rust,ignore
/// let shop = ShopFactory::new(&db, owner.id)
///     .shop_name("Corner Store")
///     .build()
///     .await?;
/// ```
pub struct ShopFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    shop_name: String,
    description: Option<String>,
    is_active: bool,
}

impl<'a> ShopFactory<'a> {
    /// Creates a new ShopFactory for the owner with id `user_id`.
    ///
    /// Defaults:
    /// - shop_name: `"Shop {id}"`
    /// - description: `None`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            shop_name: format!("Shop {}", next_id()),
            description: None,
            is_active: true,
        }
    }

    pub fn shop_name(mut self, shop_name: impl Into<String>) -> Self {
        self.shop_name = shop_name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the shop entity into the database.
    pub async fn build(self) -> Result<entity::shop::Model, DbErr> {
        let now = Utc::now();
        entity::shop::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            shop_name: ActiveValue::Set(self.shop_name),
            description: ActiveValue::Set(self.description),
            is_active: ActiveValue::Set(self.is_active),
            address: ActiveValue::Set(None),
            contact: ActiveValue::Set(None),
            postal_code: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a shop with default values owned by `user_id`.
pub async fn create_shop(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::shop::Model, DbErr> {
    ShopFactory::new(db, user_id).build().await
}
