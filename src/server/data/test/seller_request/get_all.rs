use super::*;

/// Tests listing requests scoped to one user.
///
/// Expected: Ok with only that user's requests, newest first
#[tokio::test]
async fn scopes_to_user_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let older = SellerRequestFactory::new(db, customer.id)
        .status(SellerRequestStatus::Rejected)
        .build()
        .await?;
    let newer = SellerRequestFactory::new(db, customer.id)
        .message("Second try")
        .build()
        .await?;
    factory::create_seller_request(db, other.id).await?;

    let repo = SellerRequestRepository::new(db);

    let own = repo.get_all(Some(customer.id)).await?;
    let ids: Vec<i32> = own.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    let all = repo.get_all(None).await?;
    assert_eq!(all.len(), 3);

    assert!(repo.has_pending(customer.id).await?);

    Ok(())
}
