use chrono::Utc;

use crate::server::{
    error::auth::AuthError,
    middleware::token::{Claims, TokenKeys},
    model::user::{Role, User},
};

fn user() -> User {
    User {
        id: 12,
        username: "grace".to_string(),
        email: "grace@example.com".to_string(),
        role: Role::Seller,
        is_seller: true,
        is_active: true,
        created_at: Utc::now(),
    }
}

/// Tests an issued token verifies back to the same user.
///
/// Expected: Ok(Claims) with the user id as subject and the configured lifetime
#[test]
fn issued_token_verifies() {
    let keys = TokenKeys::from_secret("test-secret", 600);

    let token = keys.issue(&user()).unwrap();
    let claims = keys.verify(&token.access_token).unwrap();

    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 600);
    assert_eq!(claims.sub, "12");
    assert_eq!(claims.role, "seller");
    assert_eq!(claims.exp - claims.iat, 600);
}

/// Tests a token signed with another secret is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_foreign_signature() {
    let issuer = TokenKeys::from_secret("one-secret", 600);
    let verifier = TokenKeys::from_secret("other-secret", 600);

    let token = issuer.issue(&user()).unwrap();

    assert!(matches!(
        verifier.verify(&token.access_token),
        Err(AuthError::InvalidToken(_))
    ));
}

/// Tests an expired token is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_expired_token() {
    let keys = TokenKeys::from_secret("test-secret", 600);
    let issued_at = Utc::now().timestamp() - 7200;

    let token = keys
        .encode(&Claims::for_user(&user(), issued_at, 600))
        .unwrap();

    assert!(matches!(
        keys.verify(&token),
        Err(AuthError::InvalidToken(_))
    ));
}

/// Tests garbage input is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_malformed_token() {
    let keys = TokenKeys::from_secret("test-secret", 600);

    assert!(matches!(
        keys.verify("not-a-token"),
        Err(AuthError::InvalidToken(_))
    ));
}
