//! Normalized book records and their component types.
//!
//! [`BookRecord`] is the aggregate the assembler folds decoded field
//! contributions into. Scalar string attributes (`title`, `original_title`,
//! `udk_class`) default to the empty string — unset and empty are the same
//! thing for them, which lets a continuation contribution (a value prefixed
//! with `" - "`) append to a not-yet-established field. List attributes
//! default to empty and merge by deduplicating union; the remaining
//! attributes are optional records.

use serde::{Deserialize, Serialize};

use crate::edition::EditionInfo;
use crate::person::Person;

/// A book series reference: name plus optional volume designation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    /// Series name
    pub name: String,
    /// Volume within the series, when stated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
}

/// The original-series slot, which the catalog feeds from two field shapes.
///
/// Series uniform titles (tag 830) contribute a *list* of series while
/// personal-name series entries (tag 800) contribute a single bare record.
/// The asymmetry is preserved on purpose — downstream JSON consumers see
/// the same dual shape the catalog's previous decoder produced — and is
/// flagged for product-owner review rather than silently unified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OriginalSeries {
    /// A single bare series record (from tag 800)
    Entry(Series),
    /// A list of series records (from tag 830)
    List(Vec<Series>),
}

/// Physical measurements of a book. Height is stored in millimeters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurements {
    /// Page count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    /// Height in millimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Other physical details (illustrations and the like)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional: Option<String>,
}

/// Publication information gathered from the fixed field and imprint field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishingInformation {
    /// Place of publication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    /// Publisher name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Publication year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    /// Year of the original when this is a reprint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_original: Option<u32>,
    /// End year of a publication span
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_end: Option<u32>,
}

impl PublishingInformation {
    /// Format as a complete imprint statement, `"Place : Publisher, Year"`.
    ///
    /// Missing parts are skipped along with their separators.
    ///
    /// # Examples
    ///
    /// ```
    /// use fennica::PublishingInformation;
    ///
    /// let info = PublishingInformation {
    ///     place: Some("Porvoo".to_string()),
    ///     publisher: Some("WSOY".to_string()),
    ///     year: Some(1987),
    ///     ..PublishingInformation::default()
    /// };
    /// assert_eq!(info.format_statement(), "Porvoo : WSOY, 1987");
    /// ```
    #[must_use]
    pub fn format_statement(&self) -> String {
        let mut parts = Vec::new();
        if let Some(place) = &self.place {
            if !place.is_empty() {
                parts.push(place.clone());
            }
        }
        if let Some(publisher) = &self.publisher {
            if !publisher.is_empty() {
                parts.push(publisher.clone());
            }
        }
        let base = parts.join(" : ");
        match self.year {
            Some(year) if base.is_empty() => year.to_string(),
            Some(year) => format!("{base}, {year}"),
            None => base,
        }
    }
}

/// One ISBN entry: the number as printed plus an optional qualifier
/// (binding, volume designation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsbnEntry {
    /// The ISBN as it appears in the record, possibly hyphenated
    pub isbn: String,
    /// Qualifier text, such as `"sid."` or `"nid."`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional: Option<String>,
}

impl IsbnEntry {
    /// The ISBN without dashes or spaces.
    #[must_use]
    pub fn normalized(&self) -> String {
        self.isbn.replace(['-', ' '], "")
    }

    /// Validate the checksum, auto-detecting ISBN-10 or ISBN-13.
    ///
    /// # Examples
    ///
    /// ```
    /// use fennica::IsbnEntry;
    ///
    /// let entry = IsbnEntry { isbn: "978-0-306-40615-7".to_string(), additional: None };
    /// assert!(entry.is_valid());
    /// ```
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let clean = self.normalized();
        match clean.len() {
            10 => Self::checksum_isbn10(&clean),
            13 => Self::checksum_isbn13(&clean),
            _ => false,
        }
    }

    /// ISBN-10 weighted checksum: digits times 10..1, mod 11, `X` = 10.
    fn checksum_isbn10(clean: &str) -> bool {
        let mut sum = 0;
        for (i, ch) in clean.chars().enumerate() {
            let digit = if i == 9 && ch == 'X' {
                10
            } else if let Some(d) = ch.to_digit(10) {
                d
            } else {
                return false;
            };
            sum += digit * (10 - u32::try_from(i).unwrap_or(0));
        }
        sum % 11 == 0
    }

    /// ISBN-13 checksum: alternating weights 1 and 3, mod 10.
    fn checksum_isbn13(clean: &str) -> bool {
        if !clean.starts_with("978") && !clean.starts_with("979") {
            return false;
        }
        let mut sum = 0;
        for (i, ch) in clean.chars().enumerate() {
            if let Some(digit) = ch.to_digit(10) {
                let weight = if i % 2 == 0 { 1 } else { 3 };
                sum += digit * weight;
            } else {
                return false;
            }
        }
        (10 - (sum % 10)) % 10 == 0
    }
}

/// A normalized book record assembled from one catalog record's fields.
///
/// Built fresh per input record and immutable once returned; nothing is
/// shared between records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Catalog record identifier
    pub bib_id: String,
    /// Primary author (the catalog yields at most one main entry)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub author: Vec<Person>,
    /// Original-language title
    pub original_title: String,
    /// Display title
    pub title: String,
    /// Language codes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub language: Vec<String>,
    /// Parsed edition statement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<EditionInfo>,
    /// Publication place, publisher and years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publishing_information: Option<PublishingInformation>,
    /// Physical measurements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurements: Option<Measurements>,
    /// Language codes of the original when this is a translation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub original_language: Vec<String>,
    /// ISBN entries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub isbn: Vec<IsbnEntry>,
    /// Universal Decimal Classification number, space-joined
    pub udk_class: String,
    /// Finnish public libraries classification numbers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ykl_class: Vec<String>,
    /// Co-authors, translators and other added personal entries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coauthors: Vec<Person>,
    /// Subject keywords
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// Series this title belongs to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<Series>,
    /// Series of the original edition; see [`OriginalSeries`] for its shape
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_series: Option<OriginalSeries>,
    /// Shelf location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl BookRecord {
    /// Create an empty record for the given catalog identifier.
    #[must_use]
    pub fn new(bib_id: &str) -> Self {
        BookRecord {
            bib_id: bib_id.to_string(),
            ..BookRecord::default()
        }
    }

    /// Whether the record carries a usable title.
    ///
    /// A record with neither a title nor an original title is not worth
    /// emitting; the assembler reports it as "no usable record".
    #[must_use]
    pub fn is_titled(&self) -> bool {
        !self.title.is_empty() || !self.original_title.is_empty()
    }
}
