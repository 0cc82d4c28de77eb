//! Discount factory for creating test discount entities.

use crate::factory::helpers::next_id;
use chrono::{Days, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct DiscountFactory<'a> {
    db: &'a DatabaseConnection,
    admin_id: i32,
    code: String,
    percentage: f64,
    category_id: Option<i32>,
    product_id: Option<i32>,
}

impl<'a> DiscountFactory<'a> {
    /// Creates a new DiscountFactory for the admin with id `admin_id`.
    ///
    /// Defaults: code `"CODE{id}"`, 10%, valid from today for 30 days, unscoped.
    pub fn new(db: &'a DatabaseConnection, admin_id: i32) -> Self {
        Self {
            db,
            admin_id,
            code: format!("CODE{}", next_id()),
            percentage: 10.0,
            category_id: None,
            product_id: None,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn percentage(mut self, percentage: f64) -> Self {
        self.percentage = percentage;
        self
    }

    pub fn category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn product(mut self, product_id: i32) -> Self {
        self.product_id = Some(product_id);
        self
    }

    pub async fn build(self) -> Result<entity::discount::Model, DbErr> {
        let now = Utc::now();
        let today = now.date_naive();
        entity::discount::ActiveModel {
            admin_id: ActiveValue::Set(self.admin_id),
            category_id: ActiveValue::Set(self.category_id),
            product_id: ActiveValue::Set(self.product_id),
            code: ActiveValue::Set(self.code),
            percentage: ActiveValue::Set(self.percentage),
            valid_from: ActiveValue::Set(today),
            valid_until: ActiveValue::Set(today + Days::new(30)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unscoped discount with default values.
pub async fn create_discount(
    db: &DatabaseConnection,
    admin_id: i32,
) -> Result<entity::discount::Model, DbErr> {
    DiscountFactory::new(db, admin_id).build().await
}
