use super::*;

/// Tests that a shop's own name doesn't count as taken when updating it.
///
/// Expected: false when excluding the shop itself, true otherwise
#[tokio::test]
async fn excludes_given_shop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let shop = factory::shop::ShopFactory::new(db, owner.id)
        .shop_name("Bakery")
        .build()
        .await?;

    let repo = ShopRepository::new(db);
    assert!(repo.name_taken("Bakery", None).await?);
    assert!(!repo.name_taken("Bakery", Some(shop.id)).await?);
    assert!(!repo.name_taken("Butcher", None).await?);

    Ok(())
}

/// Tests updating a shop keeps its owner and refreshes `updated_at`.
///
/// Expected: Ok(Shop) with the new name and the original owner
#[tokio::test]
async fn update_keeps_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let shop = factory::create_shop(db, owner.id).await?;

    let updated = ShopRepository::new(db)
        .update(shop.id, shop_params("Renamed"))
        .await?;

    assert_eq!(updated.user_id, owner.id);
    assert_eq!(updated.shop_name, "Renamed");
    assert!(updated.updated_at >= shop.updated_at);

    Ok(())
}
