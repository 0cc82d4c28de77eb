use crate::server::{data::shop::ShopRepository, model::shop::ShopParams};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_owned;
mod name_taken;

fn shop_params(shop_name: &str) -> ShopParams {
    ShopParams {
        shop_name: shop_name.to_string(),
        description: Some("Handmade goods".to_string()),
        is_active: true,
        address: None,
        contact: None,
        postal_code: None,
    }
}
