//! Cart totals.

use crate::types::Item;

/// Σ price × quantity over `items`; `0.0` for an empty slice.
///
/// ## Example
/// ```rust
/// use cart_core::total::calc_total;
///
/// assert_eq!(calc_total(&[]), 0.0);
/// ```
pub fn calc_total(items: &[Item]) -> f64 {
    items.iter().fold(0.0, |total, item| total + item.line_total())
}
