use super::*;

/// Tests that the owner can load their shop.
///
/// Expected: Ok(Some(Shop))
#[tokio::test]
async fn returns_shop_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let shop = factory::create_shop(db, owner.id).await?;

    let result = ShopRepository::new(db).find_owned(shop.id, owner.id).await?;

    assert_eq!(result.map(|s| s.id), Some(shop.id));

    Ok(())
}

/// Tests that a shop owned by someone else looks missing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let shop = factory::create_shop(db, owner.id).await?;

    let result = ShopRepository::new(db).find_owned(shop.id, other.id).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests listing shops by owner.
///
/// Verifies that only the owner's shops are returned, ordered by id.
///
/// Expected: Ok with the two shops of the owner
#[tokio::test]
async fn lists_only_owned_shops() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let first = factory::create_shop(db, owner.id).await?;
    factory::create_shop(db, other.id).await?;
    let second = factory::create_shop(db, owner.id).await?;

    let shops = ShopRepository::new(db).get_by_owner(owner.id).await?;

    let ids: Vec<i32> = shops.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
