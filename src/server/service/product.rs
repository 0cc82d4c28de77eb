use entity::sea_orm_active_enums::ProductStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        category::CategoryRepository, inventory::InventoryRepository, product::ProductRepository,
        shop::ShopRepository,
    },
    error::{validation::FieldErrors, AppError},
    middleware::auth::Permission,
    model::{
        product::{
            CreateProductParams, Inventory, PaginatedProducts, Product, ProductFilter,
            ProductVisibility, UpdateProductParams,
        },
        user::{Capability, User},
    },
    service::{check_page, clamp_per_page, page_count},
};

fn missing_pk(id: i32) -> String {
    format!("Invalid pk \"{}\" - object does not exist.", id)
}

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Which products `user` may see.
    ///
    /// - Admins see everything
    /// - Sellers see approved products and every product of their own shops
    /// - Customers see approved products only
    pub fn visibility_for(user: &User) -> ProductVisibility {
        if user.role.has(Capability::Administer) {
            ProductVisibility::All
        } else if user.role.has(Capability::Sell) {
            ProductVisibility::ApprovedOrOwnedBy(user.id)
        } else {
            ProductVisibility::Approved
        }
    }

    /// Gets a page of products visible to `user`, optionally filtered by shop and category.
    pub async fn get_paginated(
        &self,
        user: &User,
        shop_id: Option<i32>,
        category_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedProducts, AppError> {
        let per_page = clamp_per_page(per_page);
        check_page(page, per_page)?;
        let filter = ProductFilter {
            visibility: Self::visibility_for(user),
            shop_id,
            category_id,
        };

        let (products, total) = ProductRepository::new(self.db)
            .get_paginated(filter, page, per_page)
            .await?;

        Ok(PaginatedProducts {
            products,
            total,
            page,
            per_page,
            total_pages: page_count(total, per_page),
        })
    }

    /// Gets product `id` if it exists and is visible to `user`.
    pub async fn get_visible(&self, id: i32, user: &User) -> Result<Option<Product>, AppError> {
        let product = ProductRepository::new(self.db).find_by_id(id).await?;

        Ok(product.filter(|p| Self::visibility_for(user).permits(p)))
    }

    /// Creates a product in a shop owned by `user` (any shop for admins).
    ///
    /// # Returns
    /// - `Ok(Product)` - The created product, status `pending`, with its inventory row
    /// - `Err(AppError::Validation)` - Unknown `shop_id` or `category_ids`
    /// - `Err(AuthError::AccessDenied)` - Shop belongs to another user
    pub async fn create(&self, user: &User, params: CreateProductParams) -> Result<Product, AppError> {
        let Some(shop) = ShopRepository::new(self.db)
            .find_by_id(params.shop_id)
            .await?
        else {
            return Err(FieldErrors::single("shop_id", missing_pk(params.shop_id)).into());
        };

        Permission::AdminOrOwner(shop.user_id).check(user)?;

        self.check_categories(&params.category_ids).await?;

        Ok(ProductRepository::new(self.db).create(params).await?)
    }

    /// Updates product `id`. Ownership is checked by the caller.
    pub async fn update(&self, id: i32, params: UpdateProductParams) -> Result<Product, AppError> {
        self.check_categories(&params.category_ids).await?;

        Ok(ProductRepository::new(self.db).update(id, params).await?)
    }

    pub async fn set_status(&self, id: i32, status: ProductStatus) -> Result<Product, AppError> {
        Ok(ProductRepository::new(self.db).set_status(id, status).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        Ok(ProductRepository::new(self.db).delete(id).await?)
    }

    /// Gets the inventory row of `product_id`.
    pub async fn get_inventory(&self, product_id: i32) -> Result<Inventory, AppError> {
        InventoryRepository::new(self.db)
            .get_by_product(product_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Inventory not found".to_string()))
    }

    pub async fn set_inventory(&self, product_id: i32, quantity: i32) -> Result<Inventory, AppError> {
        Ok(InventoryRepository::new(self.db)
            .set_quantity(product_id, quantity)
            .await?)
    }

    async fn check_categories(&self, category_ids: &[i32]) -> Result<(), AppError> {
        let existing = CategoryRepository::new(self.db)
            .existing_ids(category_ids)
            .await?;

        let mut errors = FieldErrors::new();
        for id in category_ids.iter().filter(|id| !existing.contains(id)) {
            errors.add("category_ids", missing_pk(*id));
        }

        errors.into_result()
    }
}
