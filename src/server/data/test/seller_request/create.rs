use super::*;

/// Tests a second pending request for the same user is refused by the database.
///
/// Expected: Err unique constraint violation, while a new request after a rejection is Ok
#[tokio::test]
async fn one_pending_request_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let repo = SellerRequestRepository::new(db);

    let first = repo.create(customer.id, None).await?;

    let err = repo
        .create(customer.id, Some("Again".to_string()))
        .await
        .unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    repo.reject(first.id).await?;
    let retry = repo.create(customer.id, Some("Again".to_string())).await?;
    assert_eq!(retry.status, SellerRequestStatus::Pending);

    Ok(())
}
