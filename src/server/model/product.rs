//! Product and inventory domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{AvailabilityStatus, ProductStatus};

use crate::{
    model::product::{
        AvailabilityStatusDto, CreateProductDto, InventoryDto, PaginatedProductsDto, ProductDto,
        ProductStatusDto, UpdateProductDto,
    },
    server::error::{
        validation::{check_decimal_places, FieldErrors},
        AppError,
    },
};

pub fn availability_from_dto(dto: AvailabilityStatusDto) -> AvailabilityStatus {
    match dto {
        AvailabilityStatusDto::Available => AvailabilityStatus::Available,
        AvailabilityStatusDto::Rented => AvailabilityStatus::Rented,
        AvailabilityStatusDto::Unavailable => AvailabilityStatus::Unavailable,
    }
}

pub fn availability_into_dto(status: AvailabilityStatus) -> AvailabilityStatusDto {
    match status {
        AvailabilityStatus::Available => AvailabilityStatusDto::Available,
        AvailabilityStatus::Rented => AvailabilityStatusDto::Rented,
        AvailabilityStatus::Unavailable => AvailabilityStatusDto::Unavailable,
    }
}

pub fn status_from_dto(dto: ProductStatusDto) -> ProductStatus {
    match dto {
        ProductStatusDto::Pending => ProductStatus::Pending,
        ProductStatusDto::Approved => ProductStatus::Approved,
        ProductStatusDto::Blocked => ProductStatus::Blocked,
    }
}

pub fn status_into_dto(status: ProductStatus) -> ProductStatusDto {
    match status {
        ProductStatus::Pending => ProductStatusDto::Pending,
        ProductStatus::Approved => ProductStatusDto::Approved,
        ProductStatus::Blocked => ProductStatusDto::Blocked,
    }
}

/// Product together with the owner of its shop and its category links.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub shop_id: i32,
    /// User owning the shop. Object-level permissions compare against this.
    pub owner_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub availability_status: AvailabilityStatus,
    pub status: ProductStatus,
    /// Sorted ascending.
    pub category_ids: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The product row
    /// - `owner_id` - `user_id` of the product's shop
    /// - `category_ids` - Ids linked through `product_category`
    pub fn from_entity(
        entity: entity::product::Model,
        owner_id: i32,
        mut category_ids: Vec<i32>,
    ) -> Self {
        category_ids.sort_unstable();

        Self {
            id: entity.id,
            shop_id: entity.shop_id,
            owner_id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            availability_status: entity.availability_status,
            status: entity.status,
            category_ids,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            shop: self.shop_id,
            name: self.name,
            description: self.description,
            price: self.price,
            availability_status: availability_into_dto(self.availability_status),
            status: status_into_dto(self.status),
            categories: self.category_ids,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Current writable fields, the base a partial update is merged onto.
    pub fn to_update_dto(&self) -> UpdateProductDto {
        UpdateProductDto {
            name: Some(self.name.clone()),
            description: self.description.clone(),
            price: Some(self.price),
            availability_status: Some(availability_into_dto(self.availability_status)),
            category_ids: self.category_ids.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedProducts {
    pub products: Vec<Product>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedProducts {
    pub fn into_dto(self) -> PaginatedProductsDto {
        PaginatedProductsDto {
            products: self.products.into_iter().map(Product::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Which products a requester may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductVisibility {
    /// Every product regardless of status.
    All,
    /// Approved products plus any product in a shop owned by this user.
    ApprovedOrOwnedBy(i32),
    /// Approved products only.
    Approved,
}

impl ProductVisibility {
    pub fn permits(self, product: &Product) -> bool {
        match self {
            ProductVisibility::All => true,
            ProductVisibility::ApprovedOrOwnedBy(user_id) => {
                product.status == ProductStatus::Approved || product.owner_id == user_id
            }
            ProductVisibility::Approved => product.status == ProductStatus::Approved,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductFilter {
    pub visibility: ProductVisibility,
    pub shop_id: Option<i32>,
    pub category_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductParams {
    pub shop_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub availability_status: AvailabilityStatus,
    pub category_ids: Vec<i32>,
    /// Initial inventory quantity.
    pub quantity: i32,
}

impl CreateProductParams {
    pub fn from_dto(dto: CreateProductDto) -> Result<Self, AppError> {
        let mut errors = FieldErrors::of(&dto);
        if let Some(price) = dto.price {
            check_decimal_places(&mut errors, "price", price, 2);
        }
        errors.into_result()?;

        Ok(Self {
            shop_id: dto.shop_id.unwrap_or_default(),
            name: dto.name.unwrap_or_default(),
            description: dto.description,
            price: dto.price.unwrap_or_default(),
            availability_status: availability_from_dto(dto.availability_status.unwrap_or_default()),
            category_ids: dedup(dto.category_ids),
            quantity: dto.quantity.unwrap_or(0),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProductParams {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub availability_status: AvailabilityStatus,
    /// Replaces every existing category link.
    pub category_ids: Vec<i32>,
}

impl UpdateProductParams {
    pub fn from_dto(dto: UpdateProductDto) -> Result<Self, AppError> {
        let mut errors = FieldErrors::of(&dto);
        if let Some(price) = dto.price {
            check_decimal_places(&mut errors, "price", price, 2);
        }
        errors.into_result()?;

        Ok(Self {
            name: dto.name.unwrap_or_default(),
            description: dto.description,
            price: dto.price.unwrap_or_default(),
            availability_status: availability_from_dto(dto.availability_status.unwrap_or_default()),
            category_ids: dedup(dto.category_ids),
        })
    }
}

fn dedup(mut ids: Vec<i32>) -> Vec<i32> {
    ids.sort_unstable();
    ids.dedup();
    ids
}

#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    pub product_id: i32,
    pub quantity: i32,
    pub updated_at: DateTime<Utc>,
}

impl Inventory {
    pub fn from_entity(entity: entity::inventory::Model) -> Self {
        Self {
            product_id: entity.product_id,
            quantity: entity.quantity,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> InventoryDto {
        InventoryDto {
            product: self.product_id,
            quantity: self.quantity,
            updated_at: self.updated_at,
        }
    }
}
