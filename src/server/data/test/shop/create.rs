use super::*;

/// Tests creating a shop.
///
/// Verifies that the owner is recorded and both timestamps are set.
///
/// Expected: Ok(Shop) owned by the given user
#[tokio::test]
async fn creates_shop_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let shop = ShopRepository::new(db)
        .create(owner.id, shop_params("Corner Store"))
        .await?;

    assert_eq!(shop.user_id, owner.id);
    assert_eq!(shop.shop_name, "Corner Store");
    assert!(shop.is_active);
    assert_eq!(shop.created_at, shop.updated_at);

    Ok(())
}

/// Tests the unique shop name constraint.
///
/// Verifies that two users can't both own a shop with the same name.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_shop_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let repo = ShopRepository::new(db);
    repo.create(first.id, shop_params("Taken")).await?;

    let result = repo.create(second.id, shop_params("Taken")).await;

    assert!(result.is_err());

    Ok(())
}
