//! Shop data repository.
//!
//! Owner-scoped lookups live here so that a shop owned by someone else is
//! indistinguishable from a missing one.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::shop::{Shop, ShopParams};

pub struct ShopRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShopRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a shop owned by `user_id`.
    pub async fn create(&self, user_id: i32, params: ShopParams) -> Result<Shop, DbErr> {
        let now = Utc::now();
        let entity = entity::shop::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            shop_name: ActiveValue::Set(params.shop_name),
            description: ActiveValue::Set(params.description),
            is_active: ActiveValue::Set(params.is_active),
            address: ActiveValue::Set(params.address),
            contact: ActiveValue::Set(params.contact),
            postal_code: ActiveValue::Set(params.postal_code),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Shop::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Shop>, DbErr> {
        let entity = entity::prelude::Shop::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Shop::from_entity))
    }

    /// Finds a shop only if it is owned by `user_id`.
    ///
    /// # Returns
    /// - `Ok(Some(Shop))` - Shop exists and belongs to the user
    /// - `Ok(None)` - Shop missing or owned by another user
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_owned(&self, id: i32, user_id: i32) -> Result<Option<Shop>, DbErr> {
        let entity = entity::prelude::Shop::find_by_id(id)
            .filter(entity::shop::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Shop::from_entity))
    }

    /// Gets all shops owned by `user_id` ordered by id.
    pub async fn get_by_owner(&self, user_id: i32) -> Result<Vec<Shop>, DbErr> {
        let entities = entity::prelude::Shop::find()
            .filter(entity::shop::Column::UserId.eq(user_id))
            .order_by_asc(entity::shop::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Shop::from_entity).collect())
    }

    /// Checks whether `shop_name` is used by any shop other than `exclude_id`.
    pub async fn name_taken(&self, shop_name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Shop::find().filter(entity::shop::Column::ShopName.eq(shop_name));

        if let Some(id) = exclude_id {
            query = query.filter(entity::shop::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Overwrites the writable fields of shop `id`. The owner is never touched.
    ///
    /// # Returns
    /// - `Ok(Shop)` - The updated shop
    /// - `Err(DbErr::RecordNotFound)` - No shop with that id
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, id: i32, params: ShopParams) -> Result<Shop, DbErr> {
        let entity = entity::shop::ActiveModel {
            id: ActiveValue::Unchanged(id),
            shop_name: ActiveValue::Set(params.shop_name),
            description: ActiveValue::Set(params.description),
            is_active: ActiveValue::Set(params.is_active),
            address: ActiveValue::Set(params.address),
            contact: ActiveValue::Set(params.contact),
            postal_code: ActiveValue::Set(params.postal_code),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Shop::from_entity(entity))
    }

    /// Deletes shop `id` with its products, their inventory and category links.
    ///
    /// Discounts pointing at the removed products keep existing with a null
    /// product reference.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        let product_ids: Vec<i32> = entity::prelude::Product::find()
            .select_only()
            .column(entity::product::Column::Id)
            .filter(entity::product::Column::ShopId.eq(id))
            .into_tuple()
            .all(&txn)
            .await?;

        if !product_ids.is_empty() {
            entity::prelude::Discount::update_many()
                .col_expr(
                    entity::discount::Column::ProductId,
                    Expr::value(Option::<i32>::None),
                )
                .filter(entity::discount::Column::ProductId.is_in(product_ids.clone()))
                .exec(&txn)
                .await?;

            entity::prelude::Inventory::delete_many()
                .filter(entity::inventory::Column::ProductId.is_in(product_ids.clone()))
                .exec(&txn)
                .await?;

            entity::prelude::ProductCategory::delete_many()
                .filter(entity::product_category::Column::ProductId.is_in(product_ids))
                .exec(&txn)
                .await?;

            entity::prelude::Product::delete_many()
                .filter(entity::product::Column::ShopId.eq(id))
                .exec(&txn)
                .await?;
        }

        entity::prelude::Shop::delete_by_id(id).exec(&txn).await?;

        txn.commit().await
    }
}
