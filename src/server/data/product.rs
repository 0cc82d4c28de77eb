//! Product data repository.
//!
//! Products are always returned together with their shop owner and category links.
//! Creation writes the product, its inventory row and its category links in one
//! transaction; deletion removes the same rows and clears discount references.

use std::collections::HashMap;

use chrono::Utc;
use entity::sea_orm_active_enums::ProductStatus;
use sea_orm::{
    sea_query::{Expr, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, TransactionTrait,
};

use crate::server::model::product::{
    CreateProductParams, Product, ProductFilter, ProductVisibility, UpdateProductParams,
};

pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a product with its inventory row and category links.
    ///
    /// The product starts in `pending` status.
    ///
    /// # Returns
    /// - `Ok(Product)` - The created product with owner and category ids
    /// - `Err(DbErr)` - Database error; nothing is written
    pub async fn create(&self, params: CreateProductParams) -> Result<Product, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let product = entity::product::ActiveModel {
            shop_id: ActiveValue::Set(params.shop_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            availability_status: ActiveValue::Set(params.availability_status),
            status: ActiveValue::Set(ProductStatus::Pending),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::inventory::ActiveModel {
            product_id: ActiveValue::Set(product.id),
            quantity: ActiveValue::Set(params.quantity),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        link_categories(&txn, product.id, &params.category_ids).await?;

        let product = hydrate_one(&txn, product).await?;

        txn.commit().await?;

        Ok(product)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>, DbErr> {
        let Some(entity) = entity::prelude::Product::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(Some(hydrate_one(self.db, entity).await?))
    }

    /// Gets a page of products matching `filter`, ordered by id.
    ///
    /// # Returns
    /// - `Ok((Vec<Product>, u64))` - Products for the page and the total number of matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        filter: ProductFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Product>, u64), DbErr> {
        let mut query = entity::prelude::Product::find()
            .join(JoinType::InnerJoin, entity::product::Relation::Shop.def());

        query = match filter.visibility {
            ProductVisibility::All => query,
            ProductVisibility::Approved => {
                query.filter(entity::product::Column::Status.eq(ProductStatus::Approved))
            }
            ProductVisibility::ApprovedOrOwnedBy(user_id) => query.filter(
                Condition::any()
                    .add(entity::product::Column::Status.eq(ProductStatus::Approved))
                    .add(entity::shop::Column::UserId.eq(user_id)),
            ),
        };

        if let Some(shop_id) = filter.shop_id {
            query = query.filter(entity::product::Column::ShopId.eq(shop_id));
        }

        if let Some(category_id) = filter.category_id {
            query = query.filter(
                entity::product::Column::Id.in_subquery(
                    Query::select()
                        .column(entity::product_category::Column::ProductId)
                        .from(entity::product_category::Entity)
                        .and_where(entity::product_category::Column::CategoryId.eq(category_id))
                        .to_owned(),
                ),
            );
        }

        let paginator = query
            .order_by_asc(entity::product::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((hydrate(self.db, entities).await?, total))
    }

    /// Overwrites the writable fields of product `id` and replaces its category links.
    pub async fn update(&self, id: i32, params: UpdateProductParams) -> Result<Product, DbErr> {
        let txn = self.db.begin().await?;

        let product = entity::product::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            availability_status: ActiveValue::Set(params.availability_status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(&txn)
        .await?;

        entity::prelude::ProductCategory::delete_many()
            .filter(entity::product_category::Column::ProductId.eq(id))
            .exec(&txn)
            .await?;
        link_categories(&txn, id, &params.category_ids).await?;

        let product = hydrate_one(&txn, product).await?;

        txn.commit().await?;

        Ok(product)
    }

    /// Sets the moderation status of product `id`.
    pub async fn set_status(&self, id: i32, status: ProductStatus) -> Result<Product, DbErr> {
        let product = entity::product::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        hydrate_one(self.db, product).await
    }

    /// Deletes product `id` with its inventory and category links, clearing
    /// discount references to it.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Discount::update_many()
            .col_expr(
                entity::discount::Column::ProductId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::discount::Column::ProductId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Inventory::delete_many()
            .filter(entity::inventory::Column::ProductId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::ProductCategory::delete_many()
            .filter(entity::product_category::Column::ProductId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Product::delete_by_id(id).exec(&txn).await?;

        txn.commit().await
    }

    /// Checks whether product `id` exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Product::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

async fn link_categories<C: ConnectionTrait>(
    db: &C,
    product_id: i32,
    category_ids: &[i32],
) -> Result<(), DbErr> {
    if category_ids.is_empty() {
        return Ok(());
    }

    let links = category_ids
        .iter()
        .map(|category_id| entity::product_category::ActiveModel {
            product_id: ActiveValue::Set(product_id),
            category_id: ActiveValue::Set(*category_id),
        });

    entity::prelude::ProductCategory::insert_many(links)
        .exec_without_returning(db)
        .await?;

    Ok(())
}

async fn hydrate_one<C: ConnectionTrait>(
    db: &C,
    entity: entity::product::Model,
) -> Result<Product, DbErr> {
    let id = entity.id;

    hydrate(db, vec![entity])
        .await?
        .pop()
        .ok_or_else(|| DbErr::RecordNotFound(format!("Product {} vanished while loading", id)))
}

/// Attaches shop owner ids and category links to product rows, keeping their order.
///
/// Uses one query for the shops and one for the links regardless of the number of rows.
async fn hydrate<C: ConnectionTrait>(
    db: &C,
    entities: Vec<entity::product::Model>,
) -> Result<Vec<Product>, DbErr> {
    if entities.is_empty() {
        return Ok(Vec::new());
    }

    let shop_ids: Vec<i32> = entities.iter().map(|p| p.shop_id).collect();
    let product_ids: Vec<i32> = entities.iter().map(|p| p.id).collect();

    let owners: HashMap<i32, i32> = entity::prelude::Shop::find()
        .filter(entity::shop::Column::Id.is_in(shop_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|shop| (shop.id, shop.user_id))
        .collect();

    let mut categories: HashMap<i32, Vec<i32>> = HashMap::new();
    for link in entity::prelude::ProductCategory::find()
        .filter(entity::product_category::Column::ProductId.is_in(product_ids))
        .all(db)
        .await?
    {
        categories
            .entry(link.product_id)
            .or_default()
            .push(link.category_id);
    }

    entities
        .into_iter()
        .map(|entity| {
            let owner_id = owners.get(&entity.shop_id).copied().ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Shop {} of product {} not found",
                    entity.shop_id, entity.id
                ))
            })?;
            let category_ids = categories.remove(&entity.id).unwrap_or_default();

            Ok(Product::from_entity(entity, owner_id, category_ids))
        })
        .collect()
}
