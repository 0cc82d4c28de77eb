use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Shop};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Shop)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// Raw statements run after the tables exist, for indexes entities can't express.
    statements: Vec<&'static str>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            statements: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a raw SQL statement executed after every table is created.
    pub fn with_statement(mut self, sql: &'static str) -> Self {
        self.statements.push(sql);
        self
    }

    /// Adds the user and shop tables.
    ///
    /// Enough for shop ownership tests that never touch the catalog.
    pub fn with_shop_tables(self) -> Self {
        self.with_table(User).with_table(Shop)
    }

    /// Adds every marketplace table in dependency order:
    /// - User
    /// - Shop
    /// - SellerRequest
    /// - Category
    /// - Product
    /// - ProductCategory
    /// - Inventory
    /// - Discount
    ///
    /// Also creates the pending seller request index.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_marketplace_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_marketplace_tables(self) -> Self {
        self.with_shop_tables()
            .with_table(SellerRequest)
            .with_table(Category)
            .with_table(Product)
            .with_table(ProductCategory)
            .with_table(Inventory)
            .with_table(Discount)
            .with_statement(entity::seller_request::PENDING_PER_USER_INDEX)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.execute_all(&self.statements).await?;

        Ok(setup)
    }
}
