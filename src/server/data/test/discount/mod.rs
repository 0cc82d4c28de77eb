use crate::server::{data::discount::DiscountRepository, model::discount::DiscountParams};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;

fn params(code: &str) -> DiscountParams {
    DiscountParams {
        code: code.to_string(),
        percentage: 12.5,
        valid_from: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        valid_until: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        category_id: None,
        product_id: None,
    }
}
