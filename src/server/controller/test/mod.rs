//! Request-level tests driving the full router, including authentication,
//! extraction and error mapping.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DbErr;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{
    middleware::token::TokenKeys, model::user::User, router::router, state::AppState,
};

mod auth;

const TEST_SECRET: &str = "controller-test-secret";

/// Router over a fresh in-memory database with every marketplace table.
struct TestApp {
    test: TestContext,
    router: Router,
    keys: TokenKeys,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new()
            .with_marketplace_tables()
            .build()
            .await
            .unwrap();
        let keys = TokenKeys::from_secret(TEST_SECRET, 3600);
        let state = AppState::new(test.db.as_ref().unwrap().clone(), keys.clone());

        Self {
            router: router(state),
            test,
            keys,
        }
    }

    fn db(&self) -> &sea_orm::DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }

    /// Issues a bearer token for a user created through a factory.
    fn token_for(&self, user: &entity::user::Model) -> String {
        self.keys
            .issue(&User::from_entity(user.clone()))
            .unwrap()
            .access_token
    }

    /// Sends a request and returns the status with the decoded JSON body
    /// (`Value::Null` for empty bodies).
    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, body)
    }
}
