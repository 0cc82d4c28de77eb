use sea_orm::DatabaseConnection;

use crate::server::{
    data::category::CategoryRepository,
    error::{validation::FieldErrors, AppError},
    model::category::{Category, CategoryParams},
};

const NAME_TAKEN: &str = "category with this name already exists.";

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn create(&self, params: CategoryParams) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        if repo.name_taken(&params.name, None).await? {
            return Err(FieldErrors::single("name", NAME_TAKEN).into());
        }

        repo.create(params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, "name", NAME_TAKEN))
    }

    /// Updates category `id`.
    ///
    /// Returns None if the category doesn't exist.
    pub async fn update(
        &self,
        id: i32,
        params: CategoryParams,
    ) -> Result<Option<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        if repo.name_taken(&params.name, Some(id)).await? {
            return Err(FieldErrors::single("name", NAME_TAKEN).into());
        }

        let category = repo
            .update(id, params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, "name", NAME_TAKEN))?;

        Ok(Some(category))
    }

    /// Deletes category `id`.
    ///
    /// Returns true if deleted, false if not found.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = CategoryRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
