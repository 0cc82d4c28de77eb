use axum::{routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        category::{self, CATEGORY_TAG},
        discount::{self, DISCOUNT_TAG},
        product::{self, PRODUCT_TAG},
        seller_request::{self, SELLER_REQUEST_TAG},
        shop::{self, SHOP_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

/// Path the generated OpenAPI document is served from.
pub const OPENAPI_PATH: &str = "/api/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Marketplace API", description = "Multi-tenant marketplace backend"),
    modifiers(&SecurityAddon),
    tags(
        (name = AUTH_TAG, description = "Registration and bearer tokens"),
        (name = USER_TAG, description = "Account administration"),
        (name = SHOP_TAG, description = "Shops owned by the requester"),
        (name = CATEGORY_TAG, description = "Product categories"),
        (name = PRODUCT_TAG, description = "Products, moderation and inventory"),
        (name = DISCOUNT_TAG, description = "Discount codes"),
        (name = SELLER_REQUEST_TAG, description = "Requests for seller access"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the API routes together with their OpenAPI document.
fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::token))
        .routes(routes!(auth::me))
        .routes(routes!(user::get_users))
        .routes(routes!(shop::get_shops, shop::create_shop))
        .routes(routes!(
            shop::get_shop,
            shop::update_shop,
            shop::partial_update_shop,
            shop::delete_shop
        ))
        .routes(routes!(category::get_categories, category::create_category))
        .routes(routes!(
            category::get_category,
            category::update_category,
            category::delete_category
        ))
        .routes(routes!(product::get_products, product::create_product))
        .routes(routes!(
            product::get_product,
            product::update_product,
            product::partial_update_product,
            product::delete_product
        ))
        .routes(routes!(product::set_product_status))
        .routes(routes!(product::get_inventory, product::set_inventory))
        .routes(routes!(discount::get_discounts, discount::create_discount))
        .routes(routes!(
            discount::get_discount,
            discount::update_discount,
            discount::delete_discount
        ))
        .routes(routes!(
            seller_request::get_seller_requests,
            seller_request::create_seller_request
        ))
        .routes(routes!(seller_request::get_seller_request))
        .routes(routes!(seller_request::approve_seller_request))
        .routes(routes!(seller_request::reject_seller_request))
}

/// Builds the complete application router with state, tracing and CORS applied.
pub fn router(state: AppState) -> Router {
    let (router, openapi) = api_router().split_for_parts();

    router
        .route(
            OPENAPI_PATH,
            get(move || {
                let openapi = openapi.clone();
                async move { Json(openapi) }
            }),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
