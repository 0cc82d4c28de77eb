use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{Capability, User},
    state::AppState,
};

/// Access predicates evaluated against an authenticated user.
///
/// Role predicates check the role's capability set. Object predicates carry the
/// id of the user owning the target object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Admin,
    Seller,
    Customer,
    AdminOrSeller,
    /// Requester must be the user with this id.
    Owner(i32),
    /// Requester must be an admin or the user with this id.
    AdminOrOwner(i32),
}

impl Permission {
    /// Evaluates the predicate, returning `AccessDenied` when it does not hold.
    pub fn check(self, user: &User) -> Result<(), AuthError> {
        if authorize(user, self) {
            Ok(())
        } else {
            Err(AuthError::AccessDenied(
                user.id,
                format!("{:?} required, role is {}", self, user.role.as_str()),
            ))
        }
    }
}

/// Returns whether `user` satisfies `permission`. Has no side effects.
pub fn authorize(user: &User, permission: Permission) -> bool {
    match permission {
        Permission::Admin => user.role.has(Capability::Administer),
        Permission::Seller => user.role.has(Capability::Sell),
        Permission::Customer => user.role.has(Capability::Purchase),
        Permission::AdminOrSeller => {
            authorize(user, Permission::Admin) || authorize(user, Permission::Seller)
        }
        Permission::Owner(owner_id) => user.id == owner_id,
        Permission::AdminOrOwner(owner_id) => {
            authorize(user, Permission::Admin) || authorize(user, Permission::Owner(owner_id))
        }
    }
}

/// Identity claimed by a verified bearer token.
///
/// Extracting this rejects the request with 401 before any body is read, so
/// unauthenticated requests never reach validation.
#[derive(Debug, Clone, Copy)]
pub struct Credentials {
    pub user_id: i32,
}

impl FromRequestParts<AppState> for Credentials {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let claims = state.tokens.verify(token)?;

        let user_id = claims
            .sub
            .parse::<i32>()
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(Self { user_id })
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    credentials: &'a Credentials,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, credentials: &'a Credentials) -> Self {
        Self { db, credentials }
    }

    /// Resolves the authenticated user and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(User)` - Active user satisfying all permissions
    /// - `Err(AuthError::UserNotFound)` - Token user missing or deactivated (401)
    /// - `Err(AuthError::AccessDenied)` - First permission that failed (403)
    /// - `Err(DbErr)` - Database error during user lookup
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let user_id = self.credentials.user_id;

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotFound(user_id).into());
        };

        if !user.is_active {
            return Err(AuthError::UserNotFound(user_id).into());
        }

        for permission in permissions {
            permission.check(&user)?;
        }

        Ok(user)
    }
}
