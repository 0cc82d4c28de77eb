use super::*;

/// Tests customers only see approved products.
///
/// Expected: Ok with only the approved product, total 1
#[tokio::test]
async fn approved_visibility_hides_pending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_seller(db).await?;
    let shop = factory::create_shop(db, seller.id).await?;
    let approved = ProductFactory::new(db, shop.id)
        .status(ProductStatus::Approved)
        .build()
        .await?;
    ProductFactory::new(db, shop.id).build().await?;
    ProductFactory::new(db, shop.id)
        .status(ProductStatus::Blocked)
        .build()
        .await?;

    let (products, total) = ProductRepository::new(db)
        .get_paginated(filter(ProductVisibility::Approved), 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(products[0].id, approved.id);

    Ok(())
}

/// Tests sellers see approved products plus every product of their own shops.
///
/// Expected: Ok with the other seller's approved product and the own pending one
#[tokio::test]
async fn seller_sees_own_unapproved_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_seller(db).await?;
    let other = factory::create_seller(db).await?;
    let own_shop = factory::create_shop(db, seller.id).await?;
    let other_shop = factory::create_shop(db, other.id).await?;

    let own_pending = ProductFactory::new(db, own_shop.id).build().await?;
    let other_approved = ProductFactory::new(db, other_shop.id)
        .status(ProductStatus::Approved)
        .build()
        .await?;
    ProductFactory::new(db, other_shop.id).build().await?;

    let (products, total) = ProductRepository::new(db)
        .get_paginated(filter(ProductVisibility::ApprovedOrOwnedBy(seller.id)), 0, 10)
        .await?;

    let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
    assert_eq!(total, 2);
    assert_eq!(ids, vec![own_pending.id, other_approved.id]);

    Ok(())
}

/// Tests filtering by shop and by category.
///
/// Expected: Ok with only the matching product for each filter
#[tokio::test]
async fn filters_by_shop_and_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_seller(db).await?;
    let first_shop = factory::create_shop(db, seller.id).await?;
    let second_shop = factory::create_shop(db, seller.id).await?;
    let category = factory::create_category(db).await?;

    let tagged = ProductFactory::new(db, first_shop.id)
        .categories(vec![category.id])
        .build()
        .await?;
    let untagged = ProductFactory::new(db, second_shop.id).build().await?;

    let repo = ProductRepository::new(db);

    let (by_shop, _) = repo
        .get_paginated(
            ProductFilter {
                shop_id: Some(second_shop.id),
                ..filter(ProductVisibility::All)
            },
            0,
            10,
        )
        .await?;
    assert_eq!(by_shop.len(), 1);
    assert_eq!(by_shop[0].id, untagged.id);

    let (by_category, total) = repo
        .get_paginated(
            ProductFilter {
                category_id: Some(category.id),
                ..filter(ProductVisibility::All)
            },
            0,
            10,
        )
        .await?;
    assert_eq!(total, 1);
    assert_eq!(by_category[0].id, tagged.id);
    assert_eq!(by_category[0].category_ids, vec![category.id]);

    Ok(())
}

/// Tests the total counts every match, not just the page.
///
/// Expected: Ok with 2 products on page 1 and total 5
#[tokio::test]
async fn total_counts_all_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_seller(db).await?;
    let shop = factory::create_shop(db, seller.id).await?;
    for _ in 0..5 {
        ProductFactory::new(db, shop.id).build().await?;
    }

    let (products, total) = ProductRepository::new(db)
        .get_paginated(filter(ProductVisibility::All), 1, 2)
        .await?;

    assert_eq!(products.len(), 2);
    assert_eq!(total, 5);

    Ok(())
}
