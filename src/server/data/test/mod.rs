mod category;
mod discount;
mod product;
mod seller_request;
mod shop;
mod user;
