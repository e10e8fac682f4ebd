#![warn(missing_docs)]

//! # Fennica: catalog record decoder
//!
//! A Rust library for decoding MARC-style tagged fields, as rendered by the
//! Fennica library catalog's staff view, into normalized book records.
//!
//! The crate covers the decoding core only: classifying raw tags, applying
//! per-tag semantic rules (dates, classification codes, personal names,
//! title and series composition, physical measurements) and folding the
//! results into one [`BookRecord`] under well-defined merge semantics.
//! Fetching pages, extracting tag/indicator/subfield triples from markup
//! and search orchestration are the caller's business.
//!
//! ## Quick Start
//!
//! ```
//! use fennica::{decode_record, RawField};
//!
//! let fields = vec![
//!     RawField::control("008", "      s1987    fi                  fin|"),
//!     RawField::builder("100", "1 ").subfield('a', "Kivi, Aleksis.").build(),
//!     RawField::builder("245", "10").subfield('a', "Seitsemän veljestä /").build(),
//!     RawField::builder("260", "  ")
//!         .subfield('a', "Porvoo :")
//!         .subfield('b', "WSOY,")
//!         .subfield('c', "1987.")
//!         .build(),
//! ];
//!
//! match decode_record("123456", &fields)? {
//!     Some(record) => {
//!         assert_eq!(record.title, "Seitsemän veljestä");
//!         assert_eq!(record.author[0].lastname, "Kivi");
//!     }
//!     None => println!("no usable record"),
//! }
//! # Ok::<(), fennica::DecodeError>(())
//! ```
//!
//! ## Modules
//!
//! - [`field`] — Raw input structures (`RawField`, `FieldContent`, `Subfield`)
//! - [`classify`] — Tag classification (`SupportedTag`, `FieldClass`)
//! - [`decoder`] — Per-tag decode rules and the record-level entry points
//! - [`assembler`] — Contribution folding and merge semantics
//! - [`book`] — Normalized output structures (`BookRecord` and components)
//! - [`person`] — Personal name parsing with provisional-record rejection
//! - [`edition`] — Edition statement parsing
//! - [`dates`] — Publication date codes and year scanning
//! - [`json`] — JSON conversion of decoded records
//! - [`error`] — Error types
//!
//! ## Diagnostics
//!
//! The decoder reports through the [`tracing`] facade on two advisory
//! streams: trace events for every supported-field decode and ignored-field
//! skip, warnings for unhandled tags, unhandled subfield codes and
//! unparsable numeric literals. Diagnostics never become errors and never
//! block a decode.
//!
//! ## Concurrency
//!
//! Decoding is single-threaded and synchronous. Within one record, field
//! order matters (continuation and merge contributions are order-dependent);
//! across records nothing is shared, so callers may decode independent
//! records in parallel freely.

pub mod assembler;
pub mod book;
pub mod classify;
pub mod dates;
pub mod decoder;
pub mod edition;
pub mod error;
pub mod field;
pub mod json;
pub mod person;

pub use assembler::{Contribution, RecordAssembler, CONTINUATION_MARKER};
pub use book::{
    BookRecord, IsbnEntry, Measurements, OriginalSeries, PublishingInformation, Series,
};
pub use classify::{classify, FieldClass, SupportedTag};
pub use dates::DateType;
pub use decoder::{decode_field, decode_record};
pub use edition::{Edition, EditionInfo};
pub use error::{DecodeError, Result};
pub use field::{FieldContent, RawField, RawFieldBuilder, Subfield};
pub use person::{parse_name, NameParse, Person};
