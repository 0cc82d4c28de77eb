//! Discount data repository.
//!
//! Category and product references are re-validated whenever discounts are read,
//! so a reference to a row that no longer exists comes back as `None`.

use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::discount::{Discount, DiscountParams};

pub struct DiscountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscountRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a discount recorded as created by `admin_id`.
    pub async fn create(&self, admin_id: i32, params: DiscountParams) -> Result<Discount, DbErr> {
        let now = Utc::now();
        let entity = entity::discount::ActiveModel {
            admin_id: ActiveValue::Set(admin_id),
            category_id: ActiveValue::Set(params.category_id),
            product_id: ActiveValue::Set(params.product_id),
            code: ActiveValue::Set(params.code),
            percentage: ActiveValue::Set(params.percentage),
            valid_from: ActiveValue::Set(params.valid_from),
            valid_until: ActiveValue::Set(params.valid_until),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.resolve_one(entity).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Discount>, DbErr> {
        let Some(entity) = entity::prelude::Discount::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(Some(self.resolve_one(entity).await?))
    }

    /// Gets every discount ordered by code.
    pub async fn get_all(&self) -> Result<Vec<Discount>, DbErr> {
        let entities = entity::prelude::Discount::find()
            .order_by_asc(entity::discount::Column::Code)
            .all(self.db)
            .await?;

        self.resolve(entities).await
    }

    pub async fn code_taken(&self, code: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Discount::find().filter(entity::discount::Column::Code.eq(code));

        if let Some(id) = exclude_id {
            query = query.filter(entity::discount::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Overwrites every writable field of discount `id`. The creating admin is kept.
    pub async fn update(&self, id: i32, params: DiscountParams) -> Result<Discount, DbErr> {
        let entity = entity::discount::ActiveModel {
            id: ActiveValue::Unchanged(id),
            category_id: ActiveValue::Set(params.category_id),
            product_id: ActiveValue::Set(params.product_id),
            code: ActiveValue::Set(params.code),
            percentage: ActiveValue::Set(params.percentage),
            valid_from: ActiveValue::Set(params.valid_from),
            valid_until: ActiveValue::Set(params.valid_until),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        self.resolve_one(entity).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Discount::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn resolve_one(&self, entity: entity::discount::Model) -> Result<Discount, DbErr> {
        let id = entity.id;

        self.resolve(vec![entity])
            .await?
            .pop()
            .ok_or_else(|| DbErr::RecordNotFound(format!("Discount {} vanished while loading", id)))
    }

    /// Converts rows to domain models, checking which references still resolve.
    async fn resolve(&self, entities: Vec<entity::discount::Model>) -> Result<Vec<Discount>, DbErr> {
        let category_ids: Vec<i32> = entities.iter().filter_map(|d| d.category_id).collect();
        let product_ids: Vec<i32> = entities.iter().filter_map(|d| d.product_id).collect();

        let categories: HashSet<i32> = if category_ids.is_empty() {
            HashSet::new()
        } else {
            entity::prelude::Category::find()
                .select_only()
                .column(entity::category::Column::Id)
                .filter(entity::category::Column::Id.is_in(category_ids))
                .into_tuple::<i32>()
                .all(self.db)
                .await?
                .into_iter()
                .collect()
        };

        let products: HashSet<i32> = if product_ids.is_empty() {
            HashSet::new()
        } else {
            entity::prelude::Product::find()
                .select_only()
                .column(entity::product::Column::Id)
                .filter(entity::product::Column::Id.is_in(product_ids))
                .into_tuple::<i32>()
                .all(self.db)
                .await?
                .into_iter()
                .collect()
        };

        Ok(entities
            .into_iter()
            .map(|entity| {
                let category_exists = entity
                    .category_id
                    .is_some_and(|id| categories.contains(&id));
                let product_exists = entity
                    .product_id
                    .is_some_and(|id| products.contains(&id));
                Discount::from_entity(entity, category_exists, product_exists)
            })
            .collect())
    }
}
