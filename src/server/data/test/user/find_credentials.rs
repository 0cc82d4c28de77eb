use super::*;

/// Tests loading a user together with the stored password hash.
///
/// Expected: Ok(Some((User, hash)))
#[tokio::test]
async fn returns_user_and_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db)
        .username("dave")
        .password_hash("stored-hash")
        .build()
        .await?;

    let result = UserRepository::new(db).find_credentials("dave").await?;

    let (user, hash) = result.unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(hash, "stored-hash");

    Ok(())
}

/// Tests lookup of an unknown username.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).find_credentials("nobody").await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests username and email existence checks.
///
/// Expected: true for stored values, false otherwise
#[tokio::test]
async fn detects_existing_username_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .username("erin")
        .email("erin@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert!(repo.username_exists("erin").await?);
    assert!(!repo.username_exists("frank").await?);
    assert!(repo.email_exists("erin@example.com").await?);
    assert!(!repo.email_exists("frank@example.com").await?);

    Ok(())
}
