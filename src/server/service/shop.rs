use sea_orm::DatabaseConnection;

use crate::server::{
    data::shop::ShopRepository,
    error::{validation::FieldErrors, AppError},
    model::shop::{Shop, ShopParams},
};

const SHOP_NAME_TAKEN: &str = "shop with this shop name already exists.";

pub struct ShopService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShopService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the shops owned by `user_id`. Admins get only their own shops as well.
    pub async fn list_for_owner(&self, user_id: i32) -> Result<Vec<Shop>, AppError> {
        Ok(ShopRepository::new(self.db).get_by_owner(user_id).await?)
    }

    /// Gets a shop if it exists and is owned by `user_id`.
    pub async fn get_owned(&self, id: i32, user_id: i32) -> Result<Option<Shop>, AppError> {
        Ok(ShopRepository::new(self.db).find_owned(id, user_id).await?)
    }

    /// Creates a shop owned by `user_id`.
    ///
    /// # Returns
    /// - `Ok(Shop)` - The created shop
    /// - `Err(AppError::Validation)` - `shop_name` already used by another shop
    pub async fn create(&self, user_id: i32, params: ShopParams) -> Result<Shop, AppError> {
        let repo = ShopRepository::new(self.db);

        if repo.name_taken(&params.shop_name, None).await? {
            return Err(FieldErrors::single("shop_name", SHOP_NAME_TAKEN).into());
        }

        repo.create(user_id, params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, "shop_name", SHOP_NAME_TAKEN))
    }

    /// Updates the writable fields of shop `id`, keeping its owner.
    pub async fn update(&self, id: i32, params: ShopParams) -> Result<Shop, AppError> {
        let repo = ShopRepository::new(self.db);

        if repo.name_taken(&params.shop_name, Some(id)).await? {
            return Err(FieldErrors::single("shop_name", SHOP_NAME_TAKEN).into());
        }

        repo.update(id, params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, "shop_name", SHOP_NAME_TAKEN))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        Ok(ShopRepository::new(self.db).delete(id).await?)
    }
}
