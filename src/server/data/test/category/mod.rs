use crate::server::{data::category::CategoryRepository, model::category::CategoryParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, category::CategoryFactory, product::ProductFactory},
};

mod delete;
mod get_all;
