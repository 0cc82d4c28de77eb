use super::*;

/// Tests detecting when an admin user exists.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin(db).await?;

    assert!(UserRepository::new(db).admin_exists().await?);

    Ok(())
}

/// Tests detecting when only non-admin users exist.
///
/// Verifies that customers and sellers don't count as admins (first-time setup scenario).
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_regular_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    UserFactory::new(db).role(RoleEntity::Seller).build().await?;

    assert!(!UserRepository::new(db).admin_exists().await?);

    Ok(())
}
