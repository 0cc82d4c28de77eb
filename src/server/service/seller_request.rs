use sea_orm::DatabaseConnection;

use crate::server::{
    data::seller_request::SellerRequestRepository,
    error::{
        validation::{FieldErrors, NON_FIELD_ERRORS},
        AppError,
    },
    model::seller_request::SellerRequest,
};

const ALREADY_PENDING: &str = "You already have a pending seller request.";

pub struct SellerRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SellerRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a request for `user_id` to become a seller.
    ///
    /// # Returns
    /// - `Ok(SellerRequest)` - The pending request
    /// - `Err(AppError::Validation)` - The user already has a pending request
    pub async fn create(
        &self,
        user_id: i32,
        message: Option<String>,
    ) -> Result<SellerRequest, AppError> {
        let repo = SellerRequestRepository::new(self.db);

        if repo.has_pending(user_id).await? {
            return Err(FieldErrors::single(NON_FIELD_ERRORS, ALREADY_PENDING).into());
        }

        repo.create(user_id, message)
            .await
            .map_err(|e| AppError::from_unique_violation(e, NON_FIELD_ERRORS, ALREADY_PENDING))
    }

    /// Gets requests, all of them when `user_id` is None.
    pub async fn list(&self, user_id: Option<i32>) -> Result<Vec<SellerRequest>, AppError> {
        Ok(SellerRequestRepository::new(self.db).get_all(user_id).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<SellerRequest>, AppError> {
        Ok(SellerRequestRepository::new(self.db).find_by_id(id).await?)
    }

    /// Approves request `id` and promotes the requester to seller.
    pub async fn approve(&self, id: i32) -> Result<SellerRequest, AppError> {
        self.require_pending(id, "approved").await?;

        Ok(SellerRequestRepository::new(self.db).approve(id).await?)
    }

    /// Rejects request `id`.
    pub async fn reject(&self, id: i32) -> Result<SellerRequest, AppError> {
        self.require_pending(id, "rejected").await?;

        Ok(SellerRequestRepository::new(self.db).reject(id).await?)
    }

    async fn require_pending(&self, id: i32, action: &str) -> Result<(), AppError> {
        let Some(request) = SellerRequestRepository::new(self.db).find_by_id(id).await? else {
            return Err(AppError::NotFound("Seller request not found".to_string()));
        };

        if !request.is_pending() {
            return Err(FieldErrors::single(
                NON_FIELD_ERRORS,
                format!("Only pending requests can be {}.", action),
            )
            .into());
        }

        Ok(())
    }
}
