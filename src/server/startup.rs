use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, middleware::password, model::user::CreateUserParams,
    model::user::Role, service::user::UserService,
};

/// Installs the global `tracing` subscriber.
///
/// Log levels come from `RUST_LOG`, falling back to `info` for this crate and
/// `warn` for everything else.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,marketplace=info,tower_http=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the configured admin account if no admin exists yet.
///
/// Does nothing when an admin is already present. When no admin exists and no
/// bootstrap credentials are configured, logs a warning since admin-only
/// endpoints will be unreachable.
///
/// # Returns
/// - `Ok(())` - An admin exists or was created
/// - `Err(AppError)` - Database error or bootstrap credentials rejected
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let user_service = UserService::new(db);

    if user_service.admin_exists().await? {
        return Ok(());
    }

    let Some(admin) = &config.admin else {
        tracing::warn!(
            "No admin account exists; set ADMIN_USERNAME, ADMIN_EMAIL and ADMIN_PASSWORD to create one"
        );
        return Ok(());
    };

    let user = user_service
        .create(CreateUserParams {
            username: admin.username.clone(),
            email: admin.email.clone(),
            password_hash: password::hash(&admin.password)?,
            role: Role::Admin,
        })
        .await?;

    tracing::info!("Created admin account '{}'", user.username);

    Ok(())
}
