use crate::server::{
    data::{seller_request::SellerRequestRepository, user::UserRepository},
    model::user::Role,
};
use entity::sea_orm_active_enums::SellerRequestStatus;
use sea_orm::{DbErr, SqlErr};
use test_utils::{
    builder::TestBuilder,
    factory::{self, seller_request::SellerRequestFactory},
};

mod approve;
mod create;
mod get_all;
