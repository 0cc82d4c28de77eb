use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        category::CategoryRepository, discount::DiscountRepository, product::ProductRepository,
    },
    error::{validation::FieldErrors, AppError},
    model::discount::{Discount, DiscountParams},
};

const CODE_TAKEN: &str = "discount with this code already exists.";

pub struct DiscountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscountService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Discount>, AppError> {
        Ok(DiscountRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Discount>, AppError> {
        Ok(DiscountRepository::new(self.db).find_by_id(id).await?)
    }

    /// Creates a discount on behalf of admin `admin_id`.
    pub async fn create(&self, admin_id: i32, params: DiscountParams) -> Result<Discount, AppError> {
        self.check(&params, None).await?;

        DiscountRepository::new(self.db)
            .create(admin_id, params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, "code", CODE_TAKEN))
    }

    /// Updates discount `id`.
    ///
    /// Returns None if the discount doesn't exist.
    pub async fn update(
        &self,
        id: i32,
        params: DiscountParams,
    ) -> Result<Option<Discount>, AppError> {
        let repo = DiscountRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        self.check(&params, Some(id)).await?;

        let discount = repo
            .update(id, params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, "code", CODE_TAKEN))?;

        Ok(Some(discount))
    }

    /// Deletes discount `id`.
    ///
    /// Returns true if deleted, false if not found.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = DiscountRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }

    /// Checks code uniqueness and that referenced rows exist.
    async fn check(&self, params: &DiscountParams, exclude_id: Option<i32>) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();

        if DiscountRepository::new(self.db)
            .code_taken(&params.code, exclude_id)
            .await?
        {
            errors.add("code", CODE_TAKEN);
        }

        if let Some(category_id) = params.category_id {
            if CategoryRepository::new(self.db)
                .find_by_id(category_id)
                .await?
                .is_none()
            {
                errors.add(
                    "category_id",
                    format!("Invalid pk \"{}\" - object does not exist.", category_id),
                );
            }
        }

        if let Some(product_id) = params.product_id {
            if !ProductRepository::new(self.db).exists(product_id).await? {
                errors.add(
                    "product_id",
                    format!("Invalid pk \"{}\" - object does not exist.", product_id),
                );
            }
        }

        errors.into_result()
    }
}
