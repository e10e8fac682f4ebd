//! Folding field contributions into one book record.
//!
//! Tag decoders emit [`Contribution`] values; the [`RecordAssembler`] folds
//! them, in field order, into a [`BookRecord`]. Merging is type-directed
//! and total — exactly one rule applies to every contribution:
//!
//! 1. list onto list — union, deduplicated by structural equality, first
//!    occurrence keeping its position;
//! 2. record onto record — field-wise shallow merge, incoming set fields
//!    win;
//! 3. string onto string, incoming prefixed with the continuation marker
//!    `" - "` — append;
//! 4. anything else — replace.
//!
//! The rules are dispatched on the static type of each attribute, so there
//! is no runtime shape inspection and no unreachable pairing.

use crate::book::{BookRecord, IsbnEntry, Measurements, OriginalSeries, PublishingInformation, Series};
use crate::edition::EditionInfo;
use crate::person::Person;

/// Prefix marking a string contribution as a continuation of the current
/// value rather than a replacement.
pub const CONTINUATION_MARKER: &str = " - ";

/// One attribute contribution decoded from a raw field.
///
/// A single field may yield zero, one or several contributions (a title
/// statement can emit both `Series` and `Title`).
#[derive(Debug, Clone, PartialEq)]
pub enum Contribution {
    /// Primary author entry (tag 100)
    Author(Vec<Person>),
    /// Added personal entries (tag 700)
    Coauthors(Vec<Person>),
    /// Display title text (tags 245, 246)
    Title(String),
    /// Original title text (tag 240)
    OriginalTitle(String),
    /// Language codes (tags 008, 041)
    Language(Vec<String>),
    /// Original-language codes (tag 041)
    OriginalLanguage(Vec<String>),
    /// UDC classification string (tag 080)
    UdkClass(String),
    /// YKL classification numbers (tag 084)
    YklClass(Vec<String>),
    /// Subject keywords (tag 650)
    Keywords(Vec<String>),
    /// ISBN entries (tag 020)
    Isbn(Vec<IsbnEntry>),
    /// Parsed edition statement (tag 250)
    Edition(EditionInfo),
    /// Publication place/publisher/years (tags 008, 260)
    PublishingInformation(PublishingInformation),
    /// Physical measurements (tag 300)
    Measurements(Measurements),
    /// Series references (tags 245, 490)
    Series(Vec<Series>),
    /// Original-series references, list shape (tag 830)
    OriginalSeriesList(Vec<Series>),
    /// Original-series reference, bare record shape (tag 800)
    OriginalSeriesEntry(Series),
    /// Shelf location (tag 852)
    Location(String),
}

/// Rule 1: union with structural dedup, preserving first-occurrence order.
fn merge_list<T: PartialEq>(current: &mut Vec<T>, incoming: Vec<T>) {
    for item in incoming {
        if !current.contains(&item) {
            current.push(item);
        }
    }
}

/// Rule 3/4 for scalar strings: append on the continuation marker,
/// replace otherwise.
fn merge_scalar(current: &mut String, incoming: String) {
    if incoming.starts_with(CONTINUATION_MARKER) {
        current.push_str(&incoming);
    } else {
        *current = incoming;
    }
}

/// Rule 2 for publication info: incoming set fields overwrite.
fn merge_publishing(current: &mut PublishingInformation, incoming: PublishingInformation) {
    if incoming.place.is_some() {
        current.place = incoming.place;
    }
    if incoming.publisher.is_some() {
        current.publisher = incoming.publisher;
    }
    if incoming.year.is_some() {
        current.year = incoming.year;
    }
    if incoming.year_original.is_some() {
        current.year_original = incoming.year_original;
    }
    if incoming.year_end.is_some() {
        current.year_end = incoming.year_end;
    }
}

/// Rule 2 for measurements: incoming set fields overwrite.
fn merge_measurements(current: &mut Measurements, incoming: Measurements) {
    if incoming.pages.is_some() {
        current.pages = incoming.pages;
    }
    if incoming.height.is_some() {
        current.height = incoming.height;
    }
    if incoming.additional.is_some() {
        current.additional = incoming.additional;
    }
}

/// Rule 2 for a bare series record: the name always arrives set, the
/// volume only overwrites when present.
fn merge_series_entry(current: &mut Series, incoming: Series) {
    current.name = incoming.name;
    if incoming.volume.is_some() {
        current.volume = incoming.volume;
    }
}

/// Assembles decoded contributions into one [`BookRecord`].
///
/// # Examples
///
/// ```
/// use fennica::{Contribution, RecordAssembler};
///
/// let mut assembler = RecordAssembler::new("123456");
/// assembler.push(Contribution::Title("Seitsemän veljestä".to_string()));
/// assembler.push(Contribution::Keywords(vec!["romaanit".to_string()]));
///
/// let record = assembler.finish().expect("titled record");
/// assert_eq!(record.title, "Seitsemän veljestä");
/// ```
#[derive(Debug)]
pub struct RecordAssembler {
    record: BookRecord,
}

impl RecordAssembler {
    /// Start assembling a record for the given catalog identifier.
    #[must_use]
    pub fn new(bib_id: &str) -> Self {
        RecordAssembler {
            record: BookRecord::new(bib_id),
        }
    }

    /// Fold one contribution into the record under the merge rules.
    pub fn push(&mut self, contribution: Contribution) {
        let record = &mut self.record;
        match contribution {
            Contribution::Author(people) => merge_list(&mut record.author, people),
            Contribution::Coauthors(people) => merge_list(&mut record.coauthors, people),
            Contribution::Language(codes) => merge_list(&mut record.language, codes),
            Contribution::OriginalLanguage(codes) => {
                merge_list(&mut record.original_language, codes);
            }
            Contribution::YklClass(numbers) => merge_list(&mut record.ykl_class, numbers),
            Contribution::Keywords(words) => merge_list(&mut record.keywords, words),
            Contribution::Isbn(entries) => merge_list(&mut record.isbn, entries),
            Contribution::Series(entries) => merge_list(&mut record.series, entries),

            Contribution::Title(text) => merge_scalar(&mut record.title, text),
            Contribution::OriginalTitle(text) => merge_scalar(&mut record.original_title, text),
            Contribution::UdkClass(text) => merge_scalar(&mut record.udk_class, text),

            // An edition statement has no optional top-level fields, so its
            // shallow merge degenerates to replacement.
            Contribution::Edition(info) => record.edition = Some(info),
            Contribution::PublishingInformation(info) => {
                match &mut record.publishing_information {
                    Some(current) => merge_publishing(current, info),
                    None => record.publishing_information = Some(info),
                }
            }
            Contribution::Measurements(info) => match &mut record.measurements {
                Some(current) => merge_measurements(current, info),
                None => record.measurements = Some(info),
            },

            Contribution::OriginalSeriesList(entries) => match &mut record.original_series {
                Some(OriginalSeries::List(current)) => merge_list(current, entries),
                _ => record.original_series = Some(OriginalSeries::List(entries)),
            },
            Contribution::OriginalSeriesEntry(entry) => match &mut record.original_series {
                Some(OriginalSeries::Entry(current)) => merge_series_entry(current, entry),
                _ => record.original_series = Some(OriginalSeries::Entry(entry)),
            },

            Contribution::Location(text) => match &mut record.location {
                Some(current) if text.starts_with(CONTINUATION_MARKER) => current.push_str(&text),
                _ => record.location = Some(text),
            },
        }
    }

    /// Finish assembly.
    ///
    /// Returns `None` when the folded record has neither a title nor an
    /// original title — "no usable record", which callers treat as a skip,
    /// not an error.
    #[must_use]
    pub fn finish(self) -> Option<BookRecord> {
        if self.record.is_titled() {
            Some(self.record)
        } else {
            None
        }
    }
}
