use crate::server::{
    data::{inventory::InventoryRepository, product::ProductRepository},
    model::product::{CreateProductParams, ProductFilter, ProductVisibility, UpdateProductParams},
};
use entity::sea_orm_active_enums::{AvailabilityStatus, ProductStatus};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{
    builder::TestBuilder,
    factory::{self, product::ProductFactory},
};

mod create;
mod delete;
mod get_paginated;
mod inventory;
mod update;

fn create_params(shop_id: i32, category_ids: Vec<i32>) -> CreateProductParams {
    CreateProductParams {
        shop_id,
        name: "Teapot".to_string(),
        description: Some("Cast iron".to_string()),
        price: 24.5,
        availability_status: AvailabilityStatus::Available,
        category_ids,
        quantity: 7,
    }
}

fn filter(visibility: ProductVisibility) -> ProductFilter {
    ProductFilter {
        visibility,
        shop_id: None,
        category_id: None,
    }
}
