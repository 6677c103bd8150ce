//! # Domain Types
//!
//! Output types of a parse call.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────────┐        ┌─────────────────────────┐        │
//! │  │      ParseResult        │        │         Item            │        │
//! │  │  ─────────────────────  │ 1    * │  ─────────────────────  │        │
//! │  │  items: Vec<Item>       │───────►│  name                   │        │
//! │  │  total: f64             │        │  price (f64, >= 0)      │        │
//! │  └─────────────────────────┘        │  quantity (u64)         │        │
//! │                                     │  id (generated)         │        │
//! │                                     └─────────────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is transient: created by one parse call and handed back to
//! the caller.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Item
// =============================================================================

/// One line of the cart.
///
/// Field order is the JSON order: `name`, `price`, `quantity`, `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// Product name, trimmed.
    pub name: String,

    /// Unit price.
    pub price: f64,

    /// Number of units.
    pub quantity: u64,

    /// Generated identifier, unique within one parse result.
    pub id: String,
}

impl Item {
    /// Price × quantity for this line.
    #[inline]
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

// =============================================================================
// Parse Result
// =============================================================================

/// The parsed cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ParseResult {
    pub items: Vec<Item>,

    /// Σ price × quantity over `items`.
    pub total: f64,
}

impl ParseResult {
    /// The total rounded to whole cents.
    pub fn total_money(&self) -> Money {
        Money::from_amount(self.total)
    }

    /// Sum of all quantities, saturating at `u64::MAX`.
    pub fn total_quantity(&self) -> u64 {
        self.items
            .iter()
            .fold(0, |sum: u64, i| sum.saturating_add(i.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: f64, quantity: u64, id: &str) -> Item {
        Item {
            name: name.to_string(),
            price,
            quantity,
            id: id.to_string(),
        }
    }

    #[test]
    fn test_item_json_shape() {
        let json = serde_json::to_string(&item("Test Item", 15.99, 3, "abc")).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Test Item","price":15.99,"quantity":3,"id":"abc"}"#
        );
    }

    #[test]
    fn test_parse_result_json_shape() {
        let result = ParseResult {
            items: vec![item("A", 1.5, 2, "1")],
            total: 3.0,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["items"][0]["name"], "A");
        assert_eq!(json["total"], 3.0);
    }

    #[test]
    fn test_summary_helpers() {
        let result = ParseResult {
            items: vec![item("A", 10.0, 2, "1"), item("B", 15.5, 1, "2")],
            total: 35.5,
        };
        assert_eq!(result.total_quantity(), 3);
        assert_eq!(result.total_money().to_string(), "$35.50");
        assert!((result.items[0].line_total() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_quantity_saturates() {
        let result = ParseResult {
            items: vec![item("A", 0.0, u64::MAX, "1"), item("B", 0.0, 5, "2")],
            total: 0.0,
        };
        assert_eq!(result.total_quantity(), u64::MAX);
    }
}
