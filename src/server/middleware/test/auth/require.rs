use super::*;

/// Tests an active user passing every permission.
///
/// Expected: Ok(User) for the token's user
#[tokio::test]
async fn returns_user_when_permissions_hold() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let credentials = Credentials { user_id: admin.id };

    let user = AuthGuard::new(db, &credentials)
        .require(&[Permission::Admin, Permission::AdminOrSeller])
        .await?;

    assert_eq!(user.id, admin.id);
    assert_eq!(user.role, Role::Admin);

    Ok(())
}

/// Tests that every permission must hold.
///
/// Verifies that a seller passing the first permission is still denied by the second.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = UserFactory::new(db).role(RoleEntity::Seller).build().await?;
    let credentials = Credentials { user_id: seller.id };

    let result = AuthGuard::new(db, &credentials)
        .require(&[Permission::AdminOrSeller, Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == seller.id
    ));

    Ok(())
}

/// Tests a token for a user that no longer exists.
///
/// Expected: Err(AuthError::UserNotFound)
#[tokio::test]
async fn rejects_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let credentials = Credentials { user_id: 4242 };

    let result = AuthGuard::new(db, &credentials).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(4242)))
    ));

    Ok(())
}

/// Tests a deactivated user is treated as unauthenticated.
///
/// Expected: Err(AuthError::UserNotFound)
#[tokio::test]
async fn rejects_inactive_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let inactive = UserFactory::new(db).active(false).build().await?;
    let credentials = Credentials {
        user_id: inactive.id,
    };

    let result = AuthGuard::new(db, &credentials).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(_)))
    ));

    Ok(())
}
