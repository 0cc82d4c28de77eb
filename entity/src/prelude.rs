pub use super::category::Entity as Category;
pub use super::discount::Entity as Discount;
pub use super::inventory::Entity as Inventory;
pub use super::product::Entity as Product;
pub use super::product_category::Entity as ProductCategory;
pub use super::seller_request::Entity as SellerRequest;
pub use super::shop::Entity as Shop;
pub use super::user::Entity as User;
