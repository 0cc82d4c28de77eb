use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, Role},
};
use entity::sea_orm_active_enums::Role as RoleEntity;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::user::UserFactory};

mod admin_exists;
mod create;
mod find_credentials;
mod get_all_paginated;
