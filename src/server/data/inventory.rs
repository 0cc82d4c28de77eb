use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::product::Inventory;

pub struct InventoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_product(&self, product_id: i32) -> Result<Option<Inventory>, DbErr> {
        let entity = entity::prelude::Inventory::find()
            .filter(entity::inventory::Column::ProductId.eq(product_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Inventory::from_entity))
    }

    /// Sets the stock level of `product_id`, creating the row if it is missing.
    pub async fn set_quantity(&self, product_id: i32, quantity: i32) -> Result<Inventory, DbErr> {
        let now = Utc::now();

        let existing = entity::prelude::Inventory::find()
            .filter(entity::inventory::Column::ProductId.eq(product_id))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(row) => {
                let mut active: entity::inventory::ActiveModel = row.into();
                active.quantity = ActiveValue::Set(quantity);
                active.updated_at = ActiveValue::Set(now);
                active.update(self.db).await?
            }
            None => {
                entity::inventory::ActiveModel {
                    product_id: ActiveValue::Set(product_id),
                    quantity: ActiveValue::Set(quantity),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(Inventory::from_entity(entity))
    }
}
