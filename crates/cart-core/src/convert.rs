//! # Line Conversion
//!
//! Turns one validated data row into an [`Item`].
//!
//! ```text
//! "Test Item,15.99,3"
//!        │
//!        ▼  split_cells
//! ["Test Item", "15.99", "3"]
//!        │
//!        ▼  trim name, parse numbers, ask IdGenerator for an id
//! Item { name: "Test Item", price: 15.99, quantity: 3, id: "…" }
//! ```

use crate::error::{CartError, CartResult};
use crate::parser::IdGenerator;
use crate::types::Item;
use crate::validation::split_cells;
use crate::{EXPECTED_CELLS, NAME_COLUMN, PRICE_COLUMN, QUANTITY_COLUMN};

/// Converts a data row into an item with a freshly generated id.
///
/// The row is expected to have passed [`crate::validation::validate`]; the
/// values are not re-checked beyond what parsing needs. A line that still
/// cannot be converted yields [`CartError::MalformedLine`].
///
/// ## Example
/// ```rust
/// use cart_core::convert::parse_line;
/// use cart_core::UuidGenerator;
///
/// let item = parse_line("Test Item,15.99,3", &UuidGenerator).unwrap();
/// assert_eq!(item.name, "Test Item");
/// assert_eq!(item.price, 15.99);
/// assert_eq!(item.quantity, 3);
/// assert!(!item.id.is_empty());
/// ```
pub fn parse_line<G>(line: &str, ids: &G) -> CartResult<Item>
where
    G: IdGenerator + ?Sized,
{
    let malformed = || CartError::MalformedLine(line.to_string());

    let cells = split_cells(line).map_err(|_| malformed())?;
    if cells.len() != EXPECTED_CELLS {
        return Err(malformed());
    }

    let price = parse_price(&cells[PRICE_COLUMN]).ok_or_else(malformed)?;
    let quantity = parse_quantity(&cells[QUANTITY_COLUMN]).ok_or_else(malformed)?;

    Ok(Item {
        name: cells[NAME_COLUMN].trim().to_string(),
        price,
        quantity,
        id: ids.next_id(),
    })
}

/// Parses a price cell: a finite, non-negative decimal number.
pub(crate) fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
}

/// Parses a quantity cell: a non-negative integer written without a
/// fractional part or exponent.
pub(crate) fn parse_quantity(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok()
}
