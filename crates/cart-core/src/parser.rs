//! # Cart Parser
//!
//! Ties validation, conversion and totals together.
//!
//! ## Parse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CartParser::parse(path)                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SourceReader::read_to_string ──── io::Error ──► CartError::Io          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ValidatedCart::new ────────────── any error ──► ValidationFailed       │
//! │       │                                          (no partial result)    │
//! │       ▼                                                                 │
//! │  parse_line per row (IdGenerator)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  calc_total ──► ParseResult { items, total }                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Collaborators
//! The parser never touches the filesystem or a random source itself. Both
//! are handed in:
//! - [`SourceReader`] - path → text (the CLI supplies a `std::fs` reader)
//! - [`IdGenerator`] - one fresh id per item ([`UuidGenerator`] by default)

use std::io;
use std::path::Path;

use tracing::debug;
use uuid::Uuid;

use crate::convert::parse_line;
use crate::error::{CartError, CartResult};
use crate::total::calc_total;
use crate::types::ParseResult;
use crate::validation::ValidatedCart;

// =============================================================================
// Collaborators
// =============================================================================

/// Supplies the raw text of a cart document.
pub trait SourceReader {
    /// Returns the UTF-8 contents at `path`, or the error that prevented it.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

impl<F> SourceReader for F
where
    F: Fn(&Path) -> io::Result<String>,
{
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self(path)
    }
}

/// Produces identifiers for parsed items.
///
/// Every call must return a value not returned before within the same parse.
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// Random UUID v4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

// =============================================================================
// Parser
// =============================================================================

/// Parses cart documents read through a [`SourceReader`].
///
/// Holds no mutable state; every call is independent.
#[derive(Debug, Clone)]
pub struct CartParser<R, G = UuidGenerator> {
    reader: R,
    ids: G,
}

impl<R: SourceReader> CartParser<R> {
    /// Creates a parser that assigns UUID v4 ids.
    pub fn new(reader: R) -> Self {
        CartParser::with_ids(reader, UuidGenerator)
    }
}

impl<R: SourceReader, G: IdGenerator> CartParser<R, G> {
    pub fn with_ids(reader: R, ids: G) -> Self {
        CartParser { reader, ids }
    }

    /// Reads and parses the document at `path`.
    ///
    /// ## Errors
    /// - [`CartError::Io`] when the reader fails (passed through unchanged)
    /// - [`CartError::ValidationFailed`] when the document has any problem;
    ///   use [`crate::validation::validate`] to see which
    pub fn parse(&self, path: impl AsRef<Path>) -> CartResult<ParseResult> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading cart document");

        let text = self.reader.read_to_string(path)?;
        self.parse_str(&text)
    }

    /// Parses a document already in memory.
    pub fn parse_str(&self, text: &str) -> CartResult<ParseResult> {
        parse_text(text, &self.ids)
    }
}

/// Validates, converts and totals `text`.
///
/// Any validation problem aborts the whole parse with
/// [`CartError::ValidationFailed`].
pub fn parse_text<G>(text: &str, ids: &G) -> CartResult<ParseResult>
where
    G: IdGenerator + ?Sized,
{
    let cart = ValidatedCart::new(text).map_err(|errors| {
        for err in &errors {
            debug!(%err, "cart validation error");
        }
        debug!(count = errors.len(), "rejecting cart document");
        CartError::ValidationFailed
    })?;

    let items = cart
        .rows()
        .iter()
        .map(|line| parse_line(line, ids))
        .collect::<CartResult<Vec<_>>>()?;

    let total = calc_total(&items);
    debug!(items = items.len(), total, "parsed cart document");

    Ok(ParseResult { items, total })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const SAMPLE: &str = "Product name,Price,Quantity\nItem1,10.00,2\nItem2,15.50,1";

    /// Serves documents from a map; unknown paths are NotFound.
    struct MemoryReader(HashMap<PathBuf, String>);

    impl MemoryReader {
        fn with(path: &str, text: &str) -> Self {
            MemoryReader(HashMap::from([(PathBuf::from(path), text.to_string())]))
        }
    }

    impl SourceReader for MemoryReader {
        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            self.0
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such cart"))
        }
    }

    /// Deterministic ids: item-1, item-2, ...
    #[derive(Default)]
    struct SequentialIds(AtomicUsize);

    impl IdGenerator for SequentialIds {
        fn next_id(&self) -> String {
            format!("item-{}", self.0.fetch_add(1, Ordering::Relaxed) + 1)
        }
    }

    #[test]
    fn test_parse_sample_cart() {
        let parser = CartParser::new(MemoryReader::with("cart.csv", SAMPLE));
        let result = parser.parse("cart.csv").unwrap();

        assert_eq!(result.items.len(), 2);
        assert!((result.total - 35.50).abs() < 0.005);
        assert_eq!(result.items[0].name, "Item1");
        assert_eq!(result.items[1].quantity, 1);
    }

    #[test]
    fn test_blank_lines_do_not_change_result() {
        let spaced = "Product name,Price,Quantity\n\nItem1,10.00,2\n   \n\nItem2,15.50,1\n\n";
        let parser = CartParser::new(MemoryReader::with("cart.csv", spaced));
        let result = parser.parse("cart.csv").unwrap();

        assert_eq!(result.items.len(), 2);
        assert!((result.total - 35.50).abs() < 0.005);
    }

    #[test]
    fn test_validation_failure() {
        let bad = "Product name,Price,Quantity\nItem1,10.00,2\nItem2,oops,1";
        let parser = CartParser::new(MemoryReader::with("cart.csv", bad));
        let err = parser.parse("cart.csv").unwrap_err();

        assert!(matches!(err, CartError::ValidationFailed));
        assert_eq!(err.to_string(), "Validation failed!");
    }

    #[test]
    fn test_header_failure_aborts_parse() {
        let bad = "Invalid Header,Price,Quantity\nItem1,10.00,2";
        let parser = CartParser::new(MemoryReader::with("cart.csv", bad));
        assert!(matches!(
            parser.parse("cart.csv"),
            Err(CartError::ValidationFailed)
        ));
    }

    #[test]
    fn test_read_error_propagates() {
        let parser = CartParser::new(MemoryReader::with("cart.csv", SAMPLE));
        match parser.parse("missing.csv") {
            Err(CartError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_closure_reader() {
        let parser = CartParser::new(|path: &Path| {
            assert_eq!(path, Path::new("inline.csv"));
            Ok::<_, io::Error>(SAMPLE.to_string())
        });
        assert_eq!(parser.parse("inline.csv").unwrap().items.len(), 2);
    }

    #[test]
    fn test_ids_come_from_generator() {
        let parser =
            CartParser::with_ids(MemoryReader::with("cart.csv", SAMPLE), SequentialIds::default());
        let result = parser.parse("cart.csv").unwrap();

        let ids: Vec<_> = result.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["item-1", "item-2"]);
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        let mut text = String::from("Product name,Price,Quantity\n");
        for i in 0..50 {
            text.push_str(&format!("Item{i},1.00,1\n"));
        }

        let result = parse_text(&text, &UuidGenerator).unwrap();
        let ids: HashSet<_> = result.items.iter().map(|i| i.id.clone()).collect();

        assert_eq!(result.items.len(), 50);
        assert_eq!(ids.len(), 50);
        assert!(ids.iter().all(|id| !id.is_empty()));
    }

    #[test]
    fn test_header_only_cart() {
        let result = parse_text("Product name,Price,Quantity\n", &UuidGenerator).unwrap();
        assert!(result.items.is_empty());
        assert_eq!(result.total, 0.0);
    }

    #[test]
    fn test_parse_str_matches_parse() {
        let parser = CartParser::new(MemoryReader::with("cart.csv", SAMPLE));
        let from_path = parser.parse("cart.csv").unwrap();
        let from_str = parser.parse_str(SAMPLE).unwrap();

        assert_eq!(from_path.items.len(), from_str.items.len());
        assert_eq!(from_path.total, from_str.total);
    }
}
