//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Signing keys for issuing and verifying bearer tokens

use sea_orm::DatabaseConnection;

use crate::server::middleware::token::TokenKeys;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenKeys` holds reference-counted key material
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HS256 keys and token lifetime used by the auth endpoints and the
    /// credentials extractor.
    pub tokens: TokenKeys,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Bearer token signing keys
    pub fn new(db: DatabaseConnection, tokens: TokenKeys) -> Self {
        Self { db, tokens }
    }
}
