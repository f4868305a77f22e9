//! Product model with inventory predicates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Total inventory value of this product line.
    pub fn total_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// Products priced above 100 are expensive.
    pub fn is_expensive(&self) -> bool {
        self.price > 100.0
    }

    /// Fewer than 10 units on hand counts as low stock.
    pub fn is_low_stock(&self) -> bool {
        self.quantity < 10
    }
}
