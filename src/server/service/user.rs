use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, validation::FieldErrors, AppError},
    middleware::password,
    model::user::{CreateUserParams, PaginatedUsers, RegisterParams, Role, User},
    service::{check_page, clamp_per_page, page_count},
};

const USERNAME_TAKEN: &str = "A user with that username already exists.";
const EMAIL_TAKEN: &str = "user with this email already exists.";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account after checking username and email are unused.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Validation)` - Username or email already taken
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let mut errors = FieldErrors::new();
        if repo.username_exists(&params.username).await? {
            errors.add("username", USERNAME_TAKEN);
        }
        if repo.email_exists(&params.email).await? {
            errors.add("email", EMAIL_TAKEN);
        }
        errors.into_result()?;

        repo.create(params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, "username", USERNAME_TAKEN))
    }

    /// Registers a customer account with a freshly hashed password.
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let password_hash = password::hash(&params.password)?;

        self.create(CreateUserParams {
            username: params.username,
            email: params.email,
            password_hash,
            role: Role::Customer,
        })
        .await
    }

    /// Verifies a username and password pair.
    ///
    /// Unknown users, wrong passwords and inactive accounts all yield the same
    /// `InvalidCredentials` error.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some((user, hash)) = repo.find_credentials(username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !user.is_active || !password::verify(password, &hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        Ok(UserRepository::new(self.db).admin_exists().await?)
    }

    /// Gets a page of users ordered by username.
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<PaginatedUsers, AppError> {
        let per_page = clamp_per_page(per_page);
        check_page(page, per_page)?;
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages: page_count(total, per_page),
        })
    }
}
