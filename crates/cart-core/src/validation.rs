//! # Validation Module
//!
//! Structural and per-cell checks for cart CSV text.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Passes                                  │
//! │                                                                         │
//! │  raw text ──► lines() ──► drop blank lines                              │
//! │                               │                                         │
//! │          ┌────────────────────┴────────────────────┐                    │
//! │          ▼                                         ▼                    │
//! │  row 0: header check                     rows 1..n: shape check         │
//! │  └── one HEADER error on mismatch        ├── != 3 cells → ROW error     │
//! │                                          └── 3 cells → cell checks      │
//! │                                              ├── name empty  → CELL     │
//! │                                              ├── price bad   → CELL     │
//! │                                              └── qty bad     → CELL     │
//! │                                                                         │
//! │  Every check runs; errors accumulate across the whole document.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cart_core::validation::validate;
//! use cart_core::ErrorType;
//!
//! let errors = validate("Invalid Header,Price,Quantity\nItem,1.00,1");
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].kind, ErrorType::Header);
//! ```

use tracing::debug;

use crate::convert::{parse_price, parse_quantity};
use crate::error::ValidationError;
use crate::{
    DELIMITER, EXPECTED_CELLS, EXPECTED_HEADERS, NAME_COLUMN, PRICE_COLUMN, QUANTITY_COLUMN,
};

// =============================================================================
// Document Validation
// =============================================================================

/// Checks a cart document and returns every problem found.
///
/// An empty vector means the document can be converted.
///
/// ## Rules
/// - Blank (empty or whitespace-only) lines are skipped and never counted
/// - Row 0 is the header and must read exactly `Product name,Price,Quantity`
///   (no quoting, no byte order mark, no surrounding spaces)
/// - Every other row must have exactly three cells
/// - In a three-cell row, the name must be non-empty, the price a
///   non-negative number and the quantity a non-negative integer
///
/// Quantities are written in integer form only: `2` is accepted, `2.0` and
/// `1e3` are CELL errors. Any value up to `u64::MAX` is allowed.
pub fn validate(text: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut lines = non_blank_lines(text);

    if let Some(err) = check_header(lines.next()) {
        errors.push(err);
    }

    let mut rows = 0;
    for (idx, line) in lines.enumerate() {
        check_row(idx + 1, line, &mut errors);
        rows += 1;
    }

    debug!(rows, errors = errors.len(), "validated cart document");
    errors
}

// =============================================================================
// Validated Document
// =============================================================================

/// A document that passed [`validate`] with no errors.
///
/// Holding one of these is the only way into conversion; there is no way
/// back to the unvalidated state.
#[derive(Debug, Clone)]
pub struct ValidatedCart<'a> {
    rows: Vec<&'a str>,
}

impl<'a> ValidatedCart<'a> {
    /// Validates `text`, returning the collected errors on failure.
    pub fn new(text: &'a str) -> Result<Self, Vec<ValidationError>> {
        let errors = validate(text);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidatedCart {
            rows: non_blank_lines(text).skip(1).collect(),
        })
    }

    /// Data rows (header and blank lines removed), in document order.
    pub fn rows(&self) -> &[&'a str] {
        &self.rows
    }
}

// =============================================================================
// Helpers
// =============================================================================

pub(crate) fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|line| !line.trim().is_empty())
}

/// Splits one line into its cells.
///
/// Quoted cells may contain the delimiter: `"Bolt, M6",0.10,40` is three
/// cells.
pub(crate) fn split_cells(line: &str) -> Result<Vec<String>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(DELIMITER)
        .from_reader(line.as_bytes());

    match rdr.records().next() {
        Some(record) => Ok(record?.iter().map(str::to_owned).collect()),
        None => Ok(Vec::new()),
    }
}

fn check_header(line: Option<&str>) -> Option<ValidationError> {
    let expected = EXPECTED_HEADERS.join(",");

    let Some(line) = line else {
        return Some(ValidationError::header(
            0,
            format!("Missing header row, expected \"{expected}\""),
        ));
    };

    if line == expected {
        return None;
    }

    // Literal match only; the scan just locates the first differing column.
    let cells: Vec<&str> = line.split(char::from(DELIMITER)).collect();
    let width = cells.len().max(EXPECTED_HEADERS.len());
    let column = (0..width)
        .find(|&i| cells.get(i) != EXPECTED_HEADERS.get(i))
        .unwrap_or(0);

    Some(ValidationError::header(
        column,
        format!("Expected header \"{expected}\", found \"{line}\""),
    ))
}

fn check_row(row: usize, line: &str, errors: &mut Vec<ValidationError>) {
    let cells = match split_cells(line) {
        Ok(cells) => cells,
        Err(e) => {
            errors.push(ValidationError::row(
                row,
                format!("Row could not be split into cells: {e}"),
            ));
            return;
        }
    };

    if cells.len() != EXPECTED_CELLS {
        errors.push(ValidationError::row(
            row,
            format!("Expected {} cells, found {}", EXPECTED_CELLS, cells.len()),
        ));
        return;
    }

    if cells[NAME_COLUMN].trim().is_empty() {
        errors.push(ValidationError::cell(
            row,
            NAME_COLUMN,
            "Product name must not be empty",
        ));
    }

    let price = &cells[PRICE_COLUMN];
    if parse_price(price).is_none() {
        errors.push(ValidationError::cell(
            row,
            PRICE_COLUMN,
            format!("Price must be a non-negative number, found \"{price}\""),
        ));
    }

    let quantity = &cells[QUANTITY_COLUMN];
    if parse_quantity(quantity).is_none() {
        errors.push(ValidationError::cell(
            row,
            QUANTITY_COLUMN,
            format!("Quantity must be a non-negative integer, found \"{quantity}\""),
        ));
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
