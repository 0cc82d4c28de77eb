use super::*;

/// Tests deleting a category unlinks its products and clears discount references.
///
/// Expected: Ok(()) with the product kept, unlinked, and the discount unscoped
#[tokio::test]
async fn unlinks_products_and_clears_discounts() -> Result<(), DbErr> {
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
        .category(category.id)
        .build()
        .await?;

    CategoryRepository::new(db).delete(category.id).await?;

    assert!(entity::prelude::Category::find_by_id(category.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .is_some());
    assert!(entity::prelude::ProductCategory::find()
        .all(db)
        .await?
        .is_empty());

    let discount = entity::prelude::Discount::find_by_id(discount.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(discount.category_id, None);

    Ok(())
}
