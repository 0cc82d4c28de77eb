use super::*;

/// Tests creating a discount records the admin and scope.
///
/// Expected: Ok(Discount) pointing at the category
#[tokio::test]
async fn creates_scoped_discount() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let category = factory::create_category(db).await?;

    let discount = DiscountRepository::new(db)
        .create(
            admin.id,
            DiscountParams {
                category_id: Some(category.id),
                ..params("WINTER")
            },
        )
        .await?;

    assert_eq!(discount.admin_id, admin.id);
    assert_eq!(discount.category_id, Some(category.id));
    assert_eq!(discount.product_id, None);
    assert_eq!(discount.percentage, 12.5);

    Ok(())
}

/// Tests the code uniqueness check ignores the discount being updated.
///
/// Expected: true for other discounts, false when excluding the owner of the code
#[tokio::test]
async fn code_taken_excludes_self() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let discount = factory::discount::DiscountFactory::new(db, admin.id)
        .code("SUMMER")
        .build()
        .await?;

    let repo = DiscountRepository::new(db);
    assert!(repo.code_taken("SUMMER", None).await?);
    assert!(!repo.code_taken("SUMMER", Some(discount.id)).await?);

    Ok(())
}
