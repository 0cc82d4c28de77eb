use super::*;

/// Tests registering, logging in and reading the current user.
///
/// Expected: 201 customer account, 200 bearer token, 200 from `/api/auth/me`
#[tokio::test]
async fn register_then_login() -> Result<(), DbErr> {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "username": "heidi",
                "email": "heidi@example.com",
                "password": "long-enough-password"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["role"], "user");
    assert_eq!(body["is_seller"], false);
    assert!(body.get("password").is_none());

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/token",
            None,
            Some(json!({ "username": "heidi", "password": "long-enough-password" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "Bearer");
    let token = body["access_token"].as_str().unwrap().to_string();

    let (status, body) = app
        .send(Method::GET, "/api/auth/me", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "heidi");

    Ok(())
}

/// Tests a wrong password is rejected.
///
/// Expected: 401
#[tokio::test]
async fn wrong_password_is_unauthorized() -> Result<(), DbErr> {
    let app = TestApp::new().await;

    app.send(
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({
            "username": "ivan",
            "email": "ivan@example.com",
            "password": "correct-password"
        })),
    )
    .await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/token",
            None,
            Some(json!({ "username": "ivan", "password": "wrong-password" })),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());

    Ok(())
}

/// Tests registration field errors, including a taken username.
///
/// Expected: 400 keyed by `username`, then 400 keyed by `email` and `password`
#[tokio::test]
async fn registration_reports_field_errors() -> Result<(), DbErr> {
    let app = TestApp::new().await;
    factory::user::UserFactory::new(app.db())
        .username("judy")
        .build()
        .await?;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "username": "judy",
                "email": "judy@example.com",
                "password": "long-enough-password"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["username"].is_array());

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({ "username": "kim", "email": "not-an-email", "password": "short" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["email"].is_array());
    assert!(body["password"].is_array());

    Ok(())
}

/// Tests listing users is admin-only and paginated.
///
/// Expected: 403 for a customer, 200 with total and page size for an admin
#[tokio::test]
async fn user_list_requires_admin() -> Result<(), DbErr> {
    let app = TestApp::new().await;
    let admin = factory::create_admin(app.db()).await?;
    let customer = factory::create_user(app.db()).await?;
    factory::create_user(app.db()).await?;

    let (status, _) = app
        .send(
            Method::GET,
            "/api/users",
            Some(&app.token_for(&customer)),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .send(
            Method::GET,
            "/api/users?page=0&per_page=2",
            Some(&app.token_for(&admin)),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["total_pages"], 2);
    assert_eq!(body["users"].as_array().unwrap().len(), 2);

    Ok(())
}

/// Tests a page number whose offset overflows is rejected instead of queried.
///
/// Expected: 400 with errors keyed by `page`
#[tokio::test]
async fn user_list_rejects_out_of_range_page() -> Result<(), DbErr> {
    let app = TestApp::new().await;
    let admin = factory::create_admin(app.db()).await?;

    let (status, body) = app
        .send(
            Method::GET,
            "/api/users?page=1000000000000000000&per_page=100",
            Some(&app.token_for(&admin)),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["page"].is_array());

    Ok(())
}

/// Tests the OpenAPI document is served and declares bearer auth.
///
/// Expected: 200 with the shop paths and a `bearer` security scheme
#[tokio::test]
async fn serves_openapi_document() -> Result<(), DbErr> {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(Method::GET, "/api/openapi.json", None, None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/shops/{id}"].is_object());
    assert!(body["components"]["securitySchemes"]["bearer"].is_object());

    Ok(())
}
