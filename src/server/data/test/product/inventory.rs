use super::*;

/// Tests overwriting the stock level of a product.
///
/// Expected: Ok(Inventory) with the new quantity, still a single row
#[tokio::test]
async fn overwrites_existing_quantity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_seller(db).await?;
    let shop = factory::create_shop(db, seller.id).await?;
    let product = ProductFactory::new(db, shop.id).quantity(3).build().await?;

    let inventory = InventoryRepository::new(db)
        .set_quantity(product.id, 12)
        .await?;

    assert_eq!(inventory.product_id, product.id);
    assert_eq!(inventory.quantity, 12);
    assert_eq!(
        entity::prelude::Inventory::find()
            .filter(entity::inventory::Column::ProductId.eq(product.id))
            .all(db)
            .await?
            .len(),
        1
    );

    Ok(())
}
