//! User domain models and parameters.
//!
//! Provides the closed role enumeration with its capability sets, the user model
//! shared by authentication and authorization, and parameter types for account
//! creation and listing.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::Role as RoleEntity;

use crate::{
    model::{
        auth::RegisterDto,
        user::{PaginatedUsersDto, RoleDto, UserDto},
    },
    server::error::{validation::FieldErrors, AppError},
};

/// What a role is allowed to do. Permissions are evaluated against these, never
/// against role names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Manage the catalog, discounts and seller approvals.
    Administer,
    /// List products in owned shops.
    Sell,
    /// Browse and buy; may apply to become a seller.
    Purchase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Seller,
    Customer,
}

impl Role {
    /// Capability set granted by this role.
    pub fn capabilities(self) -> &'static [Capability] {
        match self {
            Role::Admin => &[Capability::Administer],
            Role::Seller => &[Capability::Sell],
            Role::Customer => &[Capability::Purchase],
        }
    }

    pub fn has(self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    /// Stored and serialized name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Seller => "seller",
            Role::Customer => "user",
        }
    }

    pub fn from_entity(role: RoleEntity) -> Self {
        match role {
            RoleEntity::Admin => Role::Admin,
            RoleEntity::Seller => Role::Seller,
            RoleEntity::Customer => Role::Customer,
        }
    }

    pub fn into_entity(self) -> RoleEntity {
        match self {
            Role::Admin => RoleEntity::Admin,
            Role::Seller => RoleEntity::Seller,
            Role::Customer => RoleEntity::Customer,
        }
    }

    pub fn into_dto(self) -> RoleDto {
        match self {
            Role::Admin => RoleDto::Admin,
            Role::Seller => RoleDto::Seller,
            Role::Customer => RoleDto::Customer,
        }
    }
}

/// Account without its credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: Role,
    /// Set once a seller request was approved.
    pub is_seller: bool,
    /// Inactive users cannot authenticate.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The password hash is dropped.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            role: Role::from_entity(entity.role),
            is_seller: entity.is_seller,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            role: self.role.into_dto(),
            is_seller: self.is_seller,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

/// Parameters for inserting a new account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    /// Argon2 PHC string, never the plain password.
    pub password_hash: String,
    pub role: Role,
}

/// Validated self-registration request. The password is still in plain text.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        FieldErrors::of(&dto).into_result()?;

        Ok(Self {
            username: dto.username.unwrap_or_default(),
            email: dto.email.unwrap_or_default(),
            password: dto.password.unwrap_or_default(),
        })
    }
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    /// Users for this page.
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of users per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
