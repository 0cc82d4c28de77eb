//! Business logic layer.
//!
//! Services sit between controllers and repositories. They enforce the rules that
//! need the database (uniqueness, existence of referenced rows, ownership of a
//! target shop, request state transitions) and return domain models.

pub mod category;
pub mod discount;
pub mod product;
pub mod seller_request;
pub mod shop;
pub mod user;

use crate::server::error::{validation::FieldErrors, AppError};

/// Largest page size accepted by list endpoints.
pub const MAX_PER_PAGE: u64 = 100;

/// Clamps a requested page size to `1..=MAX_PER_PAGE`.
pub fn clamp_per_page(per_page: u64) -> u64 {
    per_page.clamp(1, MAX_PER_PAGE)
}

/// Checks the row offset of `page` fits the database's signed 64-bit OFFSET.
///
/// # Returns
/// - `Ok(())` - The page can be fetched
/// - `Err(AppError::Validation)` - Keyed by `page` when the offset overflows
pub fn check_page(page: u64, per_page: u64) -> Result<(), AppError> {
    match page.checked_mul(per_page) {
        Some(offset) if offset <= i64::MAX as u64 => Ok(()),
        _ => Err(FieldErrors::single("page", "Page number is out of range.").into()),
    }
}

/// Number of pages needed for `total` items.
pub fn page_count(total: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        total.div_ceil(per_page)
    } else {
        0
    }
}
