//! # Error Types
//!
//! Error types for cart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cart-core errors (this file)                                           │
//! │  ├── ValidationError  - One problem found in the document (collected)  │
//! │  └── CartError        - Terminal failure of a parse call               │
//! │                                                                         │
//! │  cart-cli errors (separate crate)                                       │
//! │  └── ConfigError      - Bad flags / environment                        │
//! │                                                                         │
//! │  Flow: Vec<ValidationError> → CartError::ValidationFailed → CLI        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Validation problems are collected, never thrown one by one
//! 3. The orchestrator only reports that validation failed; callers wanting
//!    the individual problems call [`crate::validation::validate`]

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Error Type
// =============================================================================

/// Which check produced a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ErrorType {
    /// The header row does not match the expected column names.
    #[serde(rename = "HEADER")]
    Header,
    /// A data row has the wrong number of cells.
    #[serde(rename = "ROW")]
    Row,
    /// A cell in a correctly shaped row holds an unusable value.
    #[serde(rename = "CELL")]
    Cell,
}

impl ErrorType {
    /// Wire name, matching the serde representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Header => "HEADER",
            ErrorType::Row => "ROW",
            ErrorType::Cell => "CELL",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single problem found while validating a cart document.
///
/// `row` counts non-blank lines with the header at 0; `column` is 0-based.
///
/// ## Serialization
/// ```json
/// { "type": "CELL", "row": 2, "column": 1, "message": "..." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
#[error("{kind} error at row {row}, column {column}: {message}")]
pub struct ValidationError {
    #[serde(rename = "type")]
    pub kind: ErrorType,
    pub row: usize,
    pub column: usize,
    pub message: String,
}

impl ValidationError {
    pub fn header(column: usize, message: impl Into<String>) -> Self {
        ValidationError {
            kind: ErrorType::Header,
            row: 0,
            column,
            message: message.into(),
        }
    }

    pub fn row(row: usize, message: impl Into<String>) -> Self {
        ValidationError {
            kind: ErrorType::Row,
            row,
            column: 0,
            message: message.into(),
        }
    }

    pub fn cell(row: usize, column: usize, message: impl Into<String>) -> Self {
        ValidationError {
            kind: ErrorType::Cell,
            row,
            column,
            message: message.into(),
        }
    }
}

// =============================================================================
// Cart Error
// =============================================================================

/// Terminal failures of a parse call.
#[derive(Debug, Error)]
pub enum CartError {
    /// The document produced at least one [`ValidationError`].
    ///
    /// ## When This Occurs
    /// - Header row does not read `Product name,Price,Quantity`
    /// - A row has other than three cells
    /// - A price or quantity cell is not a non-negative number
    #[error("Validation failed!")]
    ValidationFailed,

    /// The source could not be read. Passed through from the reader untouched.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A line handed to the converter could not be turned into an item.
    #[error("Malformed line: {0}")]
    MalformedLine(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================
