//! Customer model with classification predicates.

use serde::{Deserialize, Serialize};

/// A customer record.
///
/// All boilerplate (debug output, cloning, equality, JSON serialization) is
/// derived; only the classification predicates are hand-written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub city: String,
    pub age: u32,
    pub total_spent: f64,
}

impl Customer {
    /// Customers who have spent more than 1000 are premium.
    pub fn is_premium(&self) -> bool {
        self.total_spent > 1000.0
    }

    /// Customers under 30 count as young.
    pub fn is_young(&self) -> bool {
        self.age < 30
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(age: u32, total_spent: f64) -> Customer {
        Customer {
            name: "Test".into(),
            email: "test@example.com".into(),
            city: "Berlin".into(),
            age,
            total_spent,
        }
    }

    #[test]
    fn premium_above_threshold() {
        assert!(customer(40, 1000.01).is_premium());
        assert!(!customer(40, 1000.0).is_premium());
        assert!(!customer(40, 999.99).is_premium());
    }

    #[test]
    fn young_below_thirty() {
        assert!(customer(29, 0.0).is_young());
        assert!(!customer(30, 0.0).is_young());
    }

    #[test]
    fn serde_round_trip() {
        let original = customer(34, 2150.0);
        let json = serde_json::to_string(&original).unwrap();
        let parsed: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
