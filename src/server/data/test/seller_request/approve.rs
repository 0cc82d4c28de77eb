use super::*;

/// Tests approving a request promotes its user.
///
/// Expected: Ok(SellerRequest) approved, user now Seller with is_seller set
#[tokio::test]
async fn approval_promotes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let request = factory::create_seller_request(db, customer.id).await?;

    let approved = SellerRequestRepository::new(db).approve(request.id).await?;

    assert_eq!(approved.status, SellerRequestStatus::Approved);

    let user = UserRepository::new(db).find_by_id(customer.id).await?.unwrap();
    assert_eq!(user.role, Role::Seller);
    assert!(user.is_seller);

    Ok(())
}

/// Tests rejecting a request leaves the user's role alone.
///
/// Expected: Ok(SellerRequest) rejected, user still Customer
#[tokio::test]
async fn rejection_keeps_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let request = factory::create_seller_request(db, customer.id).await?;

    let repo = SellerRequestRepository::new(db);
    let rejected = repo.reject(request.id).await?;

    assert_eq!(rejected.status, SellerRequestStatus::Rejected);
    assert!(!repo.has_pending(customer.id).await?);

    let user = UserRepository::new(db).find_by_id(customer.id).await?.unwrap();
    assert_eq!(user.role, Role::Customer);

    Ok(())
}
