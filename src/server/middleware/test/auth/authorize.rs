use super::*;

/// Tests role predicates for each role.
///
/// Verifies that every role satisfies exactly the predicates of its capability set.
///
/// Expected: admin passes Admin and AdminOrSeller, seller passes Seller and
/// AdminOrSeller, customer passes Customer only
#[test]
fn role_predicates_follow_capabilities() {
    let admin = user(1, Role::Admin);
    let seller = user(2, Role::Seller);
    let customer = user(3, Role::Customer);

    assert!(authorize(&admin, Permission::Admin));
    assert!(!authorize(&admin, Permission::Seller));
    assert!(!authorize(&admin, Permission::Customer));
    assert!(authorize(&admin, Permission::AdminOrSeller));

    assert!(!authorize(&seller, Permission::Admin));
    assert!(authorize(&seller, Permission::Seller));
    assert!(!authorize(&seller, Permission::Customer));
    assert!(authorize(&seller, Permission::AdminOrSeller));

    assert!(!authorize(&customer, Permission::Admin));
    assert!(!authorize(&customer, Permission::Seller));
    assert!(authorize(&customer, Permission::Customer));
    assert!(!authorize(&customer, Permission::AdminOrSeller));
}

/// Tests object predicates compare against the owner id.
///
/// Expected: Owner only for the owner, AdminOrOwner also for admins
#[test]
fn object_predicates_compare_owner() {
    let admin = user(1, Role::Admin);
    let owner = user(2, Role::Seller);
    let stranger = user(3, Role::Seller);

    assert!(authorize(&owner, Permission::Owner(owner.id)));
    assert!(!authorize(&stranger, Permission::Owner(owner.id)));
    assert!(!authorize(&admin, Permission::Owner(owner.id)));

    assert!(authorize(&owner, Permission::AdminOrOwner(owner.id)));
    assert!(authorize(&admin, Permission::AdminOrOwner(owner.id)));
    assert!(!authorize(&stranger, Permission::AdminOrOwner(owner.id)));
}

/// Tests a failed check reports access denied for the user.
///
/// Expected: Err(AuthError::AccessDenied) carrying the user id
#[test]
fn check_returns_access_denied() {
    let customer = user(7, Role::Customer);

    let result = Permission::Admin.check(&customer);

    assert!(matches!(result, Err(AuthError::AccessDenied(7, _))));
    assert!(Permission::Customer.check(&customer).is_ok());
}
