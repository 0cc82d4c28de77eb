use super::*;

/// Tests creating a customer account.
///
/// Verifies that the repository stores the role and derives `is_seller` from it.
///
/// Expected: Ok(User) with role Customer and is_seller false
#[tokio::test]
async fn creates_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Customer,
        })
        .await?;

    assert_eq!(user.username, "alice");
    assert_eq!(user.role, Role::Customer);
    assert!(!user.is_seller);
    assert!(user.is_active);

    Ok(())
}

/// Tests creating a seller account.
///
/// Expected: Ok(User) with is_seller true
#[tokio::test]
async fn seller_role_sets_seller_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(CreateUserParams {
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Seller,
        })
        .await?;

    assert!(user.is_seller);

    Ok(())
}

/// Tests the unique username constraint.
///
/// Expected: Err on the second insert with the same username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).username("carol").build().await?;

    let result = UserRepository::new(db)
        .create(CreateUserParams {
            username: "carol".to_string(),
            email: "other@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Customer,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
