use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::category::{Category, CategoryParams};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CategoryParams) -> Result<Category, DbErr> {
        let now = Utc::now();
        let entity = entity::category::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Gets every category ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let entities = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Category::from_entity).collect())
    }

    /// Returns the subset of `ids` that exist.
    pub async fn existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Category::find()
            .select_only()
            .column(entity::category::Column::Id)
            .filter(entity::category::Column::Id.is_in(ids.to_vec()))
            .into_tuple()
            .all(self.db)
            .await
    }

    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Category::find().filter(entity::category::Column::Name.eq(name));

        if let Some(id) = exclude_id {
            query = query.filter(entity::category::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn update(&self, id: i32, params: CategoryParams) -> Result<Category, DbErr> {
        let entity = entity::category::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    /// Deletes category `id`, unlinking its products and clearing discount references.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Discount::update_many()
            .col_expr(
                entity::discount::Column::CategoryId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::discount::Column::CategoryId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::ProductCategory::delete_many()
            .filter(entity::product_category::Column::CategoryId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Category::delete_by_id(id).exec(&txn).await?;

        txn.commit().await
    }
}
