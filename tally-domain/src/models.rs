use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{DomainError, DomainResult};

/// A purchasable catalog item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Decimal) -> DomainResult<Self> {
        let name = name.into();
        if price < Decimal::ZERO {
            return Err(DomainError::InvalidPrice { name, price });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            price,
        })
    }
}

// Products group by name: two listings with the same name are the same
// product regardless of id or current price.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// A buyer placing orders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

// Customers group by id; display name can change without splitting history.
impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Customer {}

impl Hash for Customer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A single product reference within an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product: Product,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(product: Product, quantity: u32) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::InvalidQuantity(product.name));
        }
        Ok(Self { product, quantity })
    }
}

/// A customer's purchase transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub customer: Customer,
    pub lines: Vec<OrderLine>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(customer: Customer) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer,
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Add a line to the order
    pub fn add_line(&mut self, line: OrderLine) {
        self.lines.push(line);
    }

    /// Order value: the sum of each line's product price. Quantity is a
    /// fulfillment detail and does not factor into the value.
    pub fn value(&self) -> Decimal {
        self.lines.iter().map(|line| line.product.price).sum()
    }
}
