use std::collections::HashMap;

use rust_decimal::Decimal;
use tally_domain::{Customer, Order, Product};
use tracing::debug;

/// Read-only queries over a stream of orders
pub struct OrdersAnalyzer;

impl OrdersAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Up to three most popular products across the given orders.
    ///
    /// Popularity is the number of order lines referencing a product,
    /// independent of line quantity. Products with equal popularity are
    /// ordered by name.
    pub fn find_three_most_popular_products<I>(&self, orders: I) -> Vec<Product>
    where
        I: IntoIterator<Item = Order>,
    {
        let mut occurrences: HashMap<Product, u64> = HashMap::new();
        for order in orders {
            for line in order.lines {
                *occurrences.entry(line.product).or_insert(0) += 1;
            }
        }
        debug!("Counted line occurrences for {} distinct products", occurrences.len());

        let mut ranked: Vec<(Product, u64)> = occurrences.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.name.cmp(&b.0.name)));

        ranked
            .into_iter()
            .take(3)
            .map(|(product, _)| product)
            .collect()
    }

    /// The customer with the highest total value of placed orders, or `None`
    /// when there are no orders.
    ///
    /// An order's value is the sum of its lines' product prices (quantity is
    /// not factored in). If two customers tie on total value, either may be
    /// returned.
    pub fn find_most_valuable_customer<I>(&self, orders: I) -> Option<Customer>
    where
        I: IntoIterator<Item = Order>,
    {
        let mut totals: HashMap<Customer, Decimal> = HashMap::new();
        for order in orders {
            let value = order.value();
            *totals.entry(order.customer).or_insert(Decimal::ZERO) += value;
        }
        debug!("Accumulated order value for {} customers", totals.len());

        totals
            .into_iter()
            .max_by_key(|(_, total)| *total)
            .map(|(customer, _)| customer)
    }
}

impl Default for OrdersAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
