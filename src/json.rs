//! JSON conversion of decoded book records.
//!
//! Decoded records travel onward as JSON. The layout is the one downstream
//! consumers already rely on: optional attributes are omitted when unset,
//! empty lists are omitted, and the original-series slot keeps its dual
//! shape (bare object from tag 800, array from tag 830).
//!
//! # Examples
//!
//! ```
//! use fennica::{json, BookRecord};
//!
//! let mut record = BookRecord::new("123456");
//! record.title = "Seitsemän veljestä".to_string();
//!
//! let value = json::book_to_json(&record)?;
//! assert_eq!(value["bib_id"], "123456");
//!
//! let restored = json::book_from_json(&value)?;
//! assert_eq!(restored, record);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde_json::Value;

use crate::book::BookRecord;

/// Convert a book record to a JSON value.
///
/// # Errors
///
/// Returns an error if the record cannot be represented as JSON.
pub fn book_to_json(record: &BookRecord) -> serde_json::Result<Value> {
    serde_json::to_value(record)
}

/// Convert a JSON value back to a book record.
///
/// Reverses the transformation performed by [`book_to_json`].
///
/// # Errors
///
/// Returns an error if the JSON is missing required fields or malformed.
pub fn book_from_json(value: &Value) -> serde_json::Result<BookRecord> {
    serde_json::from_value(value.clone())
}
