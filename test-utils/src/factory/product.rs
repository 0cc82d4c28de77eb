//! Product factory for creating test product entities.
//!
//! Every product is inserted together with its inventory row, mirroring what the
//! product repository does.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::{AvailabilityStatus, ProductStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test products in a given shop.
///
/// # Example
///
/// ```rust,ignore
/// let product = ProductFactory::new(&db, shop.id)
///     .price(19.99)
///     .status(ProductStatus::Approved)
///     .categories(vec![category.id])
///     .build()
///     .await?;
/// ```
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    shop_id: i32,
    name: String,
    price: f64,
    availability_status: AvailabilityStatus,
    status: ProductStatus,
    quantity: i32,
    category_ids: Vec<i32>,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory.
    ///
    /// Defaults:
    /// - name: `"Product {id}"`
    /// - price: `10.0`
    /// - availability_status: `Available`
    /// - status: `Pending`
    /// - quantity: `0`
    /// - no categories
    pub fn new(db: &'a DatabaseConnection, shop_id: i32) -> Self {
        Self {
            db,
            shop_id,
            name: format!("Product {}", next_id()),
            price: 10.0,
            availability_status: AvailabilityStatus::Available,
            status: ProductStatus::Pending,
            quantity: 0,
            category_ids: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn availability(mut self, availability_status: AvailabilityStatus) -> Self {
        self.availability_status = availability_status;
        self
    }

    pub fn status(mut self, status: ProductStatus) -> Self {
        self.status = status;
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn categories(mut self, category_ids: Vec<i32>) -> Self {
        self.category_ids = category_ids;
        self
    }

    /// Inserts the product, its inventory row and its category links.
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        let now = Utc::now();
        let product = entity::product::ActiveModel {
            shop_id: ActiveValue::Set(self.shop_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            price: ActiveValue::Set(self.price),
            availability_status: ActiveValue::Set(self.availability_status),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::inventory::ActiveModel {
            product_id: ActiveValue::Set(product.id),
            quantity: ActiveValue::Set(self.quantity),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for category_id in self.category_ids {
            entity::product_category::ActiveModel {
                product_id: ActiveValue::Set(product.id),
                category_id: ActiveValue::Set(category_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(product)
    }
}

/// Creates a pending product with default values in `shop_id`.
pub async fn create_product(
    db: &DatabaseConnection,
    shop_id: i32,
) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db, shop_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory};
    use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

    #[tokio::test]
    async fn creates_inventory_with_product() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_marketplace_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, _, product) = factory::helpers::create_product_with_dependencies(db).await?;

        let inventory = entity::prelude::Inventory::find()
            .filter(entity::inventory::Column::ProductId.eq(product.id))
            .one(db)
            .await?;

        assert!(inventory.is_some());
        assert_eq!(inventory.unwrap().quantity, 0);

        Ok(())
    }
}
