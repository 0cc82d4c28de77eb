use super::*;

/// Tests creating a product writes its inventory row and category links.
///
/// Verifies that the product starts as pending and carries the shop owner's id.
///
/// Expected: Ok(Product) with status Pending, inventory quantity 7 and both categories
#[tokio::test]
async fn creates_product_with_inventory_and_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_seller(db).await?;
    let shop = factory::create_shop(db, seller.id).await?;
    let first = factory::create_category(db).await?;
    let second = factory::create_category(db).await?;

    let product = ProductRepository::new(db)
        .create(create_params(shop.id, vec![second.id, first.id]))
        .await?;

    assert_eq!(product.status, ProductStatus::Pending);
    assert_eq!(product.owner_id, seller.id);
    assert_eq!(product.category_ids, vec![first.id, second.id]);

    let inventory = InventoryRepository::new(db)
        .get_by_product(product.id)
        .await?
        .unwrap();
    assert_eq!(inventory.quantity, 7);

    Ok(())
}

/// Tests a failed insert leaves nothing behind.
///
/// Verifies that linking an unknown category rolls back the product and its inventory.
///
/// Expected: Err, with no product or inventory rows written
#[tokio::test]
async fn rolls_back_on_failed_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_seller(db).await?;
    let shop = factory::create_shop(db, seller.id).await?;

    let result = ProductRepository::new(db)
        .create(create_params(shop.id, vec![9999]))
        .await;

    assert!(result.is_err());
    assert!(entity::prelude::Product::find().all(db).await?.is_empty());
    assert!(entity::prelude::Inventory::find().all(db).await?.is_empty());

    Ok(())
}
