use super::*;

/// Tests deleting a product removes inventory and links and clears discount references.
///
/// Expected: Ok(()) with the discount kept and its product reference null
#[tokio::test]
async fn removes_dependents_and_clears_discounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_seller(db).await?;
    let shop = factory::create_shop(db, seller.id).await?;
    let category = factory::create_category(db).await?;
    let product = ProductFactory::new(db, shop.id)
        .categories(vec![category.id])
        .build()
        .await?;
    let admin = factory::create_admin(db).await?;
    let discount = factory::discount::DiscountFactory::new(db, admin.id)
        .product(product.id)
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    repo.delete(product.id).await?;

    assert!(!repo.exists(product.id).await?);
    assert!(InventoryRepository::new(db)
        .get_by_product(product.id)
        .await?
        .is_none());
    assert!(entity::prelude::ProductCategory::find()
        .filter(entity::product_category::Column::ProductId.eq(product.id))
        .all(db)
        .await?
        .is_empty());

    let discount = entity::prelude::Discount::find_by_id(discount.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(discount.product_id, None);

    Ok(())
}
