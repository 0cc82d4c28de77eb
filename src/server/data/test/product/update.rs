use super::*;

/// Tests updating a product replaces its category links.
///
/// Expected: Ok(Product) linked only to the new category, with the new fields
#[tokio::test]
async fn replaces_category_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_seller(db).await?;
    let shop = factory::create_shop(db, seller.id).await?;
    let old = factory::create_category(db).await?;
    let new = factory::create_category(db).await?;
    let product = ProductFactory::new(db, shop.id)
        .categories(vec![old.id])
        .build()
        .await?;

    let updated = ProductRepository::new(db)
        .update(
            product.id,
            UpdateProductParams {
                name: "Kettle".to_string(),
                description: None,
                price: 30.0,
                availability_status: AvailabilityStatus::Rented,
                category_ids: vec![new.id],
            },
        )
        .await?;

    assert_eq!(updated.name, "Kettle");
    assert_eq!(updated.price, 30.0);
    assert_eq!(updated.availability_status, AvailabilityStatus::Rented);
    assert_eq!(updated.category_ids, vec![new.id]);
    assert_eq!(updated.status, ProductStatus::Pending);

    Ok(())
}

/// Tests moderation status changes.
///
/// Expected: Ok(Product) with status Approved
#[tokio::test]
async fn sets_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, product) = factory::helpers::create_product_with_dependencies(db).await?;

    let updated = ProductRepository::new(db)
        .set_status(product.id, ProductStatus::Approved)
        .await?;

    assert_eq!(updated.status, ProductStatus::Approved);

    Ok(())
}
