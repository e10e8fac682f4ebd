//! Field classification: supported, ignored, or unhandled.
//!
//! Every incoming tag falls into exactly one of three classes:
//!
//! - **Supported** — one of the tags the decoder interprets, enumerated as
//!   [`SupportedTag`] so that exhaustive handling is statically checkable.
//! - **Ignored** — tags known to carry nothing this decoder wants (record
//!   control numbers, RDA carrier terms, note fields, local 9XX fields, …).
//!   Skipping them is reported at trace level.
//! - **Unhandled** — everything else, reported at warning level so new tags
//!   showing up in catalog output become visible.
//!
//! Classification drives observability only; it never blocks a decode.

use serde::{Deserialize, Serialize};

/// The tags this decoder interprets.
///
/// One variant per supported tag. Decoding dispatches on this enum with an
/// exhaustive match, so adding a variant without a decode rule fails to
/// compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportedTag {
    /// 008 — fixed-length data elements (publication dates, language)
    FixedData,
    /// 020 — International Standard Book Number
    Isbn,
    /// 041 — language codes
    LanguageCode,
    /// 080 — Universal Decimal Classification number
    UdcNumber,
    /// 084 — other classification number (YKL when confirmed)
    OtherClassification,
    /// 100 — main entry, personal name
    MainAuthor,
    /// 240 — uniform (original) title
    UniformTitle,
    /// 245 — title statement
    TitleStatement,
    /// 246 — varying form of title
    VaryingTitle,
    /// 250 — edition statement
    EditionStatement,
    /// 260 — publication information
    Publication,
    /// 300 — physical description
    PhysicalDescription,
    /// 490 — series statement
    SeriesStatement,
    /// 650 — topical subject keyword
    TopicalSubject,
    /// 700 — added entry, personal name (co-author)
    AddedAuthor,
    /// 800 — series added entry, personal name
    SeriesPersonalName,
    /// 830 — series added entry, uniform title
    SeriesUniformTitle,
    /// 852 — holding location
    HoldingLocation,
}

impl SupportedTag {
    /// Look up the supported tag for a tag string.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "008" => Some(Self::FixedData),
            "020" => Some(Self::Isbn),
            "041" => Some(Self::LanguageCode),
            "080" => Some(Self::UdcNumber),
            "084" => Some(Self::OtherClassification),
            "100" => Some(Self::MainAuthor),
            "240" => Some(Self::UniformTitle),
            "245" => Some(Self::TitleStatement),
            "246" => Some(Self::VaryingTitle),
            "250" => Some(Self::EditionStatement),
            "260" => Some(Self::Publication),
            "300" => Some(Self::PhysicalDescription),
            "490" => Some(Self::SeriesStatement),
            "650" => Some(Self::TopicalSubject),
            "700" => Some(Self::AddedAuthor),
            "800" => Some(Self::SeriesPersonalName),
            "830" => Some(Self::SeriesUniformTitle),
            "852" => Some(Self::HoldingLocation),
            _ => None,
        }
    }

    /// The tag string for this supported tag.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::FixedData => "008",
            Self::Isbn => "020",
            Self::LanguageCode => "041",
            Self::UdcNumber => "080",
            Self::OtherClassification => "084",
            Self::MainAuthor => "100",
            Self::UniformTitle => "240",
            Self::TitleStatement => "245",
            Self::VaryingTitle => "246",
            Self::EditionStatement => "250",
            Self::Publication => "260",
            Self::PhysicalDescription => "300",
            Self::SeriesStatement => "490",
            Self::TopicalSubject => "650",
            Self::AddedAuthor => "700",
            Self::SeriesPersonalName => "800",
            Self::SeriesUniformTitle => "830",
            Self::HoldingLocation => "852",
        }
    }
}

/// Classification of a raw field tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldClass {
    /// The decoder interprets this tag.
    Supported(SupportedTag),
    /// Known tag with nothing to contribute; skipped at trace level.
    Ignored,
    /// Unknown tag; skipped at warning level.
    Unhandled,
}

/// Tags skipped without comment beyond a trace entry.
const IGNORED_TAGS: &[&str] = &[
    "000", "001", "005", "015", "035", "040", "042", "264", "336", "337", "338", "610",
];

/// Whether a tag matches one of the ignored prefix patterns:
/// note fields (5XX), linking entries (76X-78X), non-decoded added entries
/// and holdings (84X-88X), and local use fields (9XX).
fn matches_ignored_pattern(tag: &str) -> bool {
    let bytes = tag.as_bytes();
    match (bytes.first(), bytes.get(1)) {
        (Some(b'5' | b'9'), _) => true,
        (Some(b'7'), Some(second)) => (b'6'..=b'8').contains(second),
        (Some(b'8'), Some(second)) => (b'4'..=b'8').contains(second),
        _ => false,
    }
}

/// Classify a tag string.
///
/// Total and deterministic: every possible tag string falls into exactly one
/// class. Supported membership is tested first, so tags like 852 and 830
/// stay supported even though they match an ignored prefix pattern.
///
/// # Examples
///
/// ```
/// use fennica::{classify, FieldClass, SupportedTag};
///
/// assert_eq!(classify("245"), FieldClass::Supported(SupportedTag::TitleStatement));
/// assert_eq!(classify("500"), FieldClass::Ignored);
/// assert_eq!(classify("123"), FieldClass::Unhandled);
/// ```
#[must_use]
pub fn classify(tag: &str) -> FieldClass {
    if let Some(supported) = SupportedTag::from_tag(tag) {
        return FieldClass::Supported(supported);
    }
    if IGNORED_TAGS.contains(&tag) || matches_ignored_pattern(tag) {
        return FieldClass::Ignored;
    }
    FieldClass::Unhandled
}
