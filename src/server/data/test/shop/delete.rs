use super::*;

/// Tests deleting a shop removes its products and their inventory.
///
/// Verifies that discounts pointing at a removed product survive with the
/// product reference cleared.
///
/// Expected: Ok(()) with shop, product and inventory gone and discount kept
#[tokio::test]
async fn removes_products_and_clears_discounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, shop, product) = factory::helpers::create_product_with_dependencies(db).await?;
    let admin = factory::create_admin(db).await?;
    let discount = factory::discount::DiscountFactory::new(db, admin.id)
        .product(product.id)
        .build()
        .await?;

    ShopRepository::new(db).delete(shop.id).await?;

    assert!(entity::prelude::Shop::find_by_id(shop.id).one(db).await?.is_none());
    assert!(entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Inventory::find()
        .filter(entity::inventory::Column::ProductId.eq(product.id))
        .one(db)
        .await?
        .is_none());

    let discount = entity::prelude::Discount::find_by_id(discount.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(discount.product_id, None);

    Ok(())
}
