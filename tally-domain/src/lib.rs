pub mod models;

pub use models::{Customer, Order, OrderLine, Product};

use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid price {price} for product {name}: prices must be non-negative")]
    InvalidPrice { name: String, price: Decimal },
    #[error("Invalid quantity for product {0}: order lines need at least one unit")]
    InvalidQuantity(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
