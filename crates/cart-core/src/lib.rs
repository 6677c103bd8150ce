//! # cart-core: Pure Parsing Logic for Cart CSV
//!
//! This crate turns the text of a shopping cart CSV file into line items
//! and a total. Every function is pure apart from the collaborators the
//! caller hands in (file reading, id generation).
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart CSV Pipeline                                │
//! │                                                                         │
//! │   SourceReader ──► raw text                                             │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │   ┌───────────────────────────────────┐                                 │
//! │   │ validation::validate              │  HEADER / ROW / CELL errors     │
//! │   └───────────────┬───────────────────┘                                 │
//! │                   │ no errors → ValidatedCart                           │
//! │                   ▼                                                     │
//! │   ┌───────────────────────────────────┐                                 │
//! │   │ convert::parse_line (per row)     │◄── IdGenerator                  │
//! │   └───────────────┬───────────────────┘                                 │
//! │                   ▼                                                     │
//! │   ┌───────────────────────────────────┐                                 │
//! │   │ total::calc_total                 │                                 │
//! │   └───────────────┬───────────────────┘                                 │
//! │                   ▼                                                     │
//! │               ParseResult { items, total }                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Output types (Item, ParseResult)
//! - [`error`] - CartError and the per-cell ValidationError
//! - [`validation`] - Header, row and cell checks
//! - [`convert`] - One data line → one Item
//! - [`total`] - Σ price × quantity
//! - [`parser`] - The orchestrator and its collaborator traits
//! - [`money`] - Integer-cents value used to present totals
//!
//! ## Example Usage
//!
//! ```rust
//! use cart_core::parser::parse_text;
//! use cart_core::UuidGenerator;
//!
//! let csv = "Product name,Price,Quantity\nItem1,10.00,2\nItem2,15.50,1";
//! let cart = parse_text(csv, &UuidGenerator).unwrap();
//!
//! assert_eq!(cart.items.len(), 2);
//! assert_eq!(cart.total_money().to_string(), "$35.50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod convert;
pub mod error;
pub mod money;
pub mod parser;
pub mod total;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CartError, CartResult, ErrorType, ValidationError};
pub use money::Money;
pub use parser::{CartParser, IdGenerator, SourceReader, UuidGenerator};
pub use types::{Item, ParseResult};
pub use validation::{validate, ValidatedCart};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Column names the header row must carry, in order.
pub const EXPECTED_HEADERS: [&str; 3] = ["Product name", "Price", "Quantity"];

/// Number of cells every row must split into.
pub const EXPECTED_CELLS: usize = EXPECTED_HEADERS.len();

/// Cell delimiter.
pub const DELIMITER: u8 = b',';

/// Column index of the product name.
pub const NAME_COLUMN: usize = 0;

/// Column index of the unit price.
pub const PRICE_COLUMN: usize = 1;

/// Column index of the quantity.
pub const QUANTITY_COLUMN: usize = 2;
