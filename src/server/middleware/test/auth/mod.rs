use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{authorize, AuthGuard, Credentials, Permission},
    model::user::{Role, User},
};
use chrono::Utc;
use entity::sea_orm_active_enums::Role as RoleEntity;
use test_utils::{builder::TestBuilder, factory, factory::user::UserFactory};

mod authorize;
mod require;

fn user(id: i32, role: Role) -> User {
    User {
        id,
        username: format!("user{}", id),
        email: format!("user{}@example.com", id),
        role,
        is_seller: role == Role::Seller,
        is_active: true,
        created_at: Utc::now(),
    }
}
