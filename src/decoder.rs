//! Per-tag field decoders.
//!
//! [`decode_field`] classifies one raw field and, when supported, hands it
//! to the decode rule for its tag. Each rule is a pure function from the
//! field's indicator and subfields (or fixed-width control value) to a list
//! of [`Contribution`]s; the exhaustive match over [`SupportedTag`] keeps
//! "is every supported tag handled" a compile-time fact.
//!
//! Unknown subfield codes and unparsable numbers are reported on the
//! warning stream and skipped; neither aborts the decode. The only error a
//! decode can raise is a structural mismatch between a tag and its content
//! shape (see [`DecodeError`]).
//!
//! [`decode_record`] drives a whole record: fields are decoded strictly in
//! input order and folded through a [`RecordAssembler`], yielding
//! `Ok(None)` — "no usable record" — when nothing title-bearing survived.
//!
//! # Examples
//!
//! ```
//! use fennica::{decode_record, RawField};
//!
//! let fields = vec![
//!     RawField::builder("245", "10").subfield('a', "Seitsemän veljestä /").build(),
//!     RawField::builder("650", " 7").subfield('a', "romaanit").subfield('2', "ysa").build(),
//! ];
//!
//! let record = decode_record("123456", &fields)?.expect("titled record");
//! assert_eq!(record.title, "Seitsemän veljestä");
//! assert_eq!(record.keywords, vec!["romaanit".to_string()]);
//! # Ok::<(), fennica::DecodeError>(())
//! ```

use tracing::{trace, warn};

use crate::assembler::{Contribution, RecordAssembler, CONTINUATION_MARKER};
use crate::book::{BookRecord, IsbnEntry, Measurements, PublishingInformation, Series};
use crate::classify::{classify, FieldClass, SupportedTag};
use crate::dates::{first_year, fixed_year, DateType};
use crate::edition;
use crate::error::{DecodeError, Result};
use crate::field::{FieldContent, RawField, Subfield};
use crate::person::parse_name;

/// Decode one record's fields, in input order, into a book record.
///
/// Returns `Ok(None)` when assembly yields no title and no original title —
/// the record is unusable and the caller should skip it, not fail.
///
/// # Errors
///
/// Returns a [`DecodeError`] when a field's content shape contradicts its
/// tag (a control tag with subfield data or the reverse).
pub fn decode_record(bib_id: &str, fields: &[RawField]) -> Result<Option<BookRecord>> {
    let mut assembler = RecordAssembler::new(bib_id);
    for field in fields {
        for contribution in decode_field(field)? {
            assembler.push(contribution);
        }
    }
    Ok(assembler.finish())
}

/// Decode a single raw field into its attribute contributions.
///
/// Ignored and unhandled tags contribute nothing; they differ only in
/// diagnostic severity.
///
/// # Errors
///
/// Returns a [`DecodeError`] when the field's content shape contradicts its
/// tag.
pub fn decode_field(field: &RawField) -> Result<Vec<Contribution>> {
    let indicator = field.indicator_string();
    let supported = match classify(&field.tag) {
        FieldClass::Supported(supported) => supported,
        FieldClass::Ignored => {
            trace!(
                "ignored field {indicator}:{} {:?}",
                field.tag,
                field.content
            );
            return Ok(Vec::new());
        }
        FieldClass::Unhandled => {
            warn!(
                "unhandled field {indicator}:{} {:?}",
                field.tag,
                field.content
            );
            return Ok(Vec::new());
        }
    };
    trace!(
        "handled field {indicator}:{} {:?}",
        field.tag,
        field.content
    );

    let contributions = match supported {
        SupportedTag::FixedData => decode_fixed_data(control_value(field)?),
        SupportedTag::Isbn => decode_isbn(field, data_subfields(field)?),
        SupportedTag::LanguageCode => decode_language_code(field, data_subfields(field)?),
        SupportedTag::UdcNumber => decode_udc_number(field, data_subfields(field)?),
        SupportedTag::OtherClassification => {
            decode_other_classification(field, data_subfields(field)?)
        }
        SupportedTag::MainAuthor => decode_main_author(field, data_subfields(field)?),
        SupportedTag::UniformTitle => decode_uniform_title(field, data_subfields(field)?),
        SupportedTag::TitleStatement => decode_title_statement(field, data_subfields(field)?),
        SupportedTag::VaryingTitle => decode_varying_title(field, data_subfields(field)?),
        SupportedTag::EditionStatement => decode_edition_statement(field, data_subfields(field)?),
        SupportedTag::Publication => decode_publication(field, data_subfields(field)?),
        SupportedTag::PhysicalDescription => {
            decode_physical_description(field, data_subfields(field)?)
        }
        SupportedTag::SeriesStatement => decode_series(field, data_subfields(field)?, false),
        SupportedTag::TopicalSubject => decode_topical_subject(field, data_subfields(field)?),
        SupportedTag::AddedAuthor => decode_added_author(field, data_subfields(field)?),
        SupportedTag::SeriesPersonalName => {
            decode_series_personal_name(field, data_subfields(field)?)
        }
        SupportedTag::SeriesUniformTitle => decode_series(field, data_subfields(field)?, true),
        SupportedTag::HoldingLocation => decode_holding_location(field, data_subfields(field)?),
    };
    Ok(contributions)
}

/// The fixed-width value of a control field.
fn control_value(field: &RawField) -> Result<&str> {
    match &field.content {
        FieldContent::Control(value) => Ok(value),
        FieldContent::Data { .. } => Err(DecodeError::ExpectedControlField {
            tag: field.tag.clone(),
        }),
    }
}

/// The subfields of a data field.
fn data_subfields(field: &RawField) -> Result<&[Subfield]> {
    match &field.content {
        FieldContent::Data { subfields, .. } => Ok(subfields),
        FieldContent::Control(_) => Err(DecodeError::ExpectedDataField {
            tag: field.tag.clone(),
        }),
    }
}

fn warn_unhandled_subfield(field: &RawField, subfield: &Subfield) {
    warn!(
        "unhandled subfield {}:{}:{} {:?}",
        field.indicator_string(),
        field.tag,
        subfield.code,
        subfield.value
    );
}

/// A fixed 008 year slot; unparsable content is warned and omitted.
fn fixed_year_or_warn(data: &str, range: std::ops::Range<usize>) -> Option<u32> {
    let year = fixed_year(data, range.clone());
    if year.is_none() {
        warn!(
            "field 008: positions {}-{} are not a year in {data:?}",
            range.start,
            range.end - 1
        );
    }
    year
}

/// 008 — publication dates per the position-6 date type, and the language
/// code at positions 35-37 unless it is the `|||` placeholder.
fn decode_fixed_data(data: &str) -> Vec<Contribution> {
    let mut contributions = Vec::new();

    let type_code = data.chars().nth(6);
    match type_code.and_then(DateType::from_code) {
        Some(DateType::Single) => {
            contributions.push(Contribution::PublishingInformation(PublishingInformation {
                year: fixed_year_or_warn(data, 7..11),
                ..PublishingInformation::default()
            }));
        }
        Some(DateType::Range) => {
            contributions.push(Contribution::PublishingInformation(PublishingInformation {
                year: fixed_year_or_warn(data, 7..11),
                year_end: fixed_year_or_warn(data, 11..15),
                ..PublishingInformation::default()
            }));
        }
        Some(DateType::Reprint) => {
            contributions.push(Contribution::PublishingInformation(PublishingInformation {
                year: fixed_year_or_warn(data, 7..11),
                // the original year is frequently absent from reprints
                year_original: fixed_year(data, 11..15),
                ..PublishingInformation::default()
            }));
        }
        Some(DateType::NoDate) => {}
        None => warn!("field 008: unsupported publish date type {type_code:?}"),
    }

    if let Some(language) = data.get(35..38) {
        if language != "|||" {
            contributions.push(Contribution::Language(vec![language.to_string()]));
        }
    }

    contributions
}

/// 020 — one ISBN entry per field, with its optional qualifier.
fn decode_isbn(field: &RawField, subfields: &[Subfield]) -> Vec<Contribution> {
    let mut entry = IsbnEntry {
        isbn: String::new(),
        additional: None,
    };
    for subfield in subfields {
        match subfield.code {
            'a' => entry.isbn = subfield.value.clone(),
            'q' => entry.additional = Some(subfield.value.clone()),
            _ => warn_unhandled_subfield(field, subfield),
        }
    }
    vec![Contribution::Isbn(vec![entry])]
}

/// 041 — language of the text and, for translations, of the original.
fn decode_language_code(field: &RawField, subfields: &[Subfield]) -> Vec<Contribution> {
    let mut contributions = Vec::new();
    for subfield in subfields {
        match subfield.code {
            'a' => contributions.push(Contribution::Language(vec![subfield.value.clone()])),
            'h' => {
                contributions.push(Contribution::OriginalLanguage(vec![subfield.value.clone()]));
            }
            _ => warn_unhandled_subfield(field, subfield),
        }
    }
    contributions
}

/// 080 — UDC number: `a` values plus at most the first auxiliary `x`,
/// space-joined in subfield order.
fn decode_udc_number(field: &RawField, subfields: &[Subfield]) -> Vec<Contribution> {
    let mut parts: Vec<&str> = Vec::new();
    let mut auxiliary_taken = false;
    for subfield in subfields {
        match subfield.code {
            'a' => parts.push(&subfield.value),
            'x' => {
                if !auxiliary_taken {
                    parts.push(&subfield.value);
                    auxiliary_taken = true;
                }
            }
            '2' => {}
            _ => warn_unhandled_subfield(field, subfield),
        }
    }
    vec![Contribution::UdkClass(parts.join(" "))]
}

/// 084 — a classification number counts as YKL only when a `2` subfield
/// confirms the scheme.
fn decode_other_classification(field: &RawField, subfields: &[Subfield]) -> Vec<Contribution> {
    let mut candidate = None;
    let mut confirmed = false;
    for subfield in subfields {
        match subfield.code {
            'a' => candidate = Some(subfield.value.clone()),
            '2' => {
                if subfield.value == "ykl" {
                    confirmed = true;
                }
            }
            _ => warn_unhandled_subfield(field, subfield),
        }
    }
    match (confirmed, candidate) {
        (true, Some(number)) => vec![Contribution::YklClass(vec![number])],
        _ => Vec::new(),
    }
}

/// 100 — main personal entry. Relator subfields append to the person's
/// additional info, but only once an `a` heading has been accepted; a
/// rejected (provisional) heading drops the whole field.
fn decode_main_author(field: &RawField, subfields: &[Subfield]) -> Vec<Contribution> {
    let mut author = None;
    for subfield in subfields {
        match subfield.code {
            'a' => author = parse_name(&subfield.value).accepted(),
            'c' | 'e' | 'g' | 'j' => {
                if let Some(person) = &mut author {
                    person.additional.push(subfield.value.clone());
                }
            }
            'd' | '0' => {}
            _ => warn_unhandled_subfield(field, subfield),
        }
    }
    match author {
        Some(person) => vec![Contribution::Author(vec![person])],
        None => Vec::new(),
    }
}

/// 240 — uniform title, one trailing comma stripped.
fn decode_uniform_title(field: &RawField, subfields: &[Subfield]) -> Vec<Contribution> {
    let mut contributions = Vec::new();
    for subfield in subfields {
        match subfield.code {
            'a' => {
                let title = subfield.value.strip_suffix(',').unwrap_or(&subfield.value);
                contributions.push(Contribution::OriginalTitle(title.to_string()));
            }
            _ => warn_unhandled_subfield(field, subfield),
        }
    }
    contributions
}

/// Strip the trailing run of title punctuation from a 245 subfield value.
fn trim_title_value(value: &str) -> &str {
    value.trim_end_matches([' ', '.', '=', ',', '/'])
}

/// 245 — title statement. Subfields compose position-sensitively; when a
/// main title, part name and volume are all present the field describes a
/// part of a series, which additionally contributes the series itself.
fn decode_title_statement(field: &RawField, subfields: &[Subfield]) -> Vec<Contribution> {
    let mut contributions = Vec::new();
    let mut tokens: Vec<String> = Vec::new();
    let mut main_name = None;
    let mut sub_series = None;
    let mut part_name = None;
    let mut volume = None;

    for subfield in subfields {
        let value = trim_title_value(&subfield.value);
        match subfield.code {
            'a' => {
                main_name = Some(value.to_string());
                tokens.push(format!("{value} "));
            }
            'b' => {
                sub_series = Some(value.to_string());
                tokens.push(format!("{value} "));
            }
            'n' => {
                volume = Some(value.to_string());
                tokens.push(value.to_string());
            }
            'p' => part_name = Some(value.to_string()),
            'c' => {}
            _ => warn_unhandled_subfield(field, subfield),
        }
    }

    if let (Some(main_name), Some(part_name), Some(volume)) = (&main_name, &part_name, &volume) {
        contributions.push(Contribution::Series(vec![Series {
            name: main_name.clone(),
            volume: Some(volume.clone()),
        }]));
        tokens = vec![main_name.clone()];
        if let Some(sub_series) = &sub_series {
            contributions.push(Contribution::Series(vec![Series {
                name: sub_series.clone(),
                volume: None,
            }]));
            tokens.push(format!("; {sub_series}"));
        }
        tokens.push(format!(", {volume}"));
        tokens.push(format!("{CONTINUATION_MARKER}{part_name}"));
    } else if let Some(part_name) = part_name {
        if tokens.len() > 1 {
            tokens.push(format!(", {part_name}"));
        } else {
            tokens.push(part_name);
        }
    }

    if !tokens.is_empty() {
        let joined = tokens.concat();
        let title = joined.strip_suffix(['/', '.']).unwrap_or(&joined).trim();
        contributions.push(Contribution::Title(title.to_string()));
    }
    contributions
}

/// 246 — varying form of the title, contributed as a continuation of the
/// current title. Indicator values 0 and 2 mark forms not meant for
/// display; those fields are skipped whole.
fn decode_varying_title(field: &RawField, subfields: &[Subfield]) -> Vec<Contribution> {
    if matches!(field.indicator().first(), Some('0' | '2')) {
        return Vec::new();
    }
    let mut contributions = Vec::new();
    for subfield in subfields {
        match subfield.code {
            'a' => contributions.push(Contribution::Title(format!(
                "{CONTINUATION_MARKER}{}",
                subfield.value
            ))),
            'i' => {}
            _ => warn_unhandled_subfield(field, subfield),
        }
    }
    contributions
}

/// 250 — edition statement, parsed by the edition sub-parser.
fn decode_edition_statement(field: &RawField, subfields: &[Subfield]) -> Vec<Contribution> {
    let mut contributions = Vec::new();
    for subfield in subfields {
        match subfield.code {
            'a' => contributions.push(Contribution::Edition(edition::parse_statement(
                &subfield.value,
            ))),
            _ => warn_unhandled_subfield(field, subfield),
        }
    }
    contributions
}

/// 260 — imprint. The `[S.l.]`/`[s.n.]` sentinels mean place/publisher
/// unknown and suppress the component; the year is the first four-digit
/// run of the date subfield.
fn decode_publication(field: &RawField, subfields: &[Subfield]) -> Vec<Contribution> {
    let mut info = PublishingInformation::default();
    for subfield in subfields {
        match subfield.code {
            'a' => {
                if subfield.value != "[S.l.]" {
                    let place = subfield.value.strip_suffix(" :").unwrap_or(&subfield.value);
                    info.place = Some(place.replace(['[', ']'], ""));
                }
            }
            'b' => {
                if subfield.value != "[s.n.]" {
                    let publisher = subfield.value.strip_suffix(',').unwrap_or(&subfield.value);
                    info.publisher = Some(publisher.replace(['[', ']'], ""));
                }
            }
            'c' => match first_year(&subfield.value) {
                Some(year) => info.year = Some(year),
                None => warn!("field 260: no year in {:?}", subfield.value),
            },
            'e' | 'f' => {}
            _ => warn_unhandled_subfield(field, subfield),
        }
    }
    vec![Contribution::PublishingInformation(info)]
}

/// 300 — physical description: page count, other details, and height
/// normalized to millimeters.
fn decode_physical_description(field: &RawField, subfields: &[Subfield]) -> Vec<Contribution> {
    let mut measurements = Measurements::default();
    for subfield in subfields {
        match subfield.code {
            'a' => {
                let parts: Vec<&str> = subfield.value.split(' ').collect();
                if parts.len() >= 2 && (parts[1] == "s." || parts[1] == "sivua") {
                    match parts[0].parse() {
                        Ok(pages) => measurements.pages = Some(pages),
                        Err(_) => {
                            warn!("field 300: page count is not a number in {:?}", subfield.value);
                        }
                    }
                }
            }
            'b' => {
                let additional = subfield.value.strip_suffix(" ;").unwrap_or(&subfield.value);
                measurements.additional = Some(additional.to_string());
            }
            'c' => {
                let parts: Vec<&str> = subfield.value.split(' ').collect();
                if parts.len() == 2 {
                    let height: Option<u32> = parts[0].parse().ok();
                    match (parts[1], height) {
                        ("cm", Some(value)) => measurements.height = Some(value * 10),
                        ("mm", Some(value)) => measurements.height = Some(value),
                        ("cm" | "mm", None) => {
                            warn!("field 300: height is not a number in {:?}", subfield.value);
                        }
                        _ => trace!("unhandled measurement {:?}", subfield.value),
                    }
                } else {
                    trace!("unhandled measurement {:?}", subfield.value);
                }
            }
            _ => warn_unhandled_subfield(field, subfield),
        }
    }
    vec![Contribution::Measurements(measurements)]
}

/// 650 — topical subject keyword.
fn decode_topical_subject(field: &RawField, subfields: &[Subfield]) -> Vec<Contribution> {
    let mut contributions = Vec::new();
    for subfield in subfields {
        match subfield.code {
            'a' => contributions.push(Contribution::Keywords(vec![subfield.value.clone()])),
            '2' => {}
            _ => warn_unhandled_subfield(field, subfield),
        }
    }
    contributions
}

/// 700 — added personal entry, one co-author contribution per heading.
/// A rejected (provisional) heading contributes nothing.
fn decode_added_author(field: &RawField, subfields: &[Subfield]) -> Vec<Contribution> {
    let mut contributions = Vec::new();
    for subfield in subfields {
        match subfield.code {
            'a' => {
                if let Some(person) = parse_name(&subfield.value).accepted() {
                    contributions.push(Contribution::Coauthors(vec![person]));
                }
            }
            'i' | 'd' | 't' | '0' => {}
            _ => warn_unhandled_subfield(field, subfield),
        }
    }
    contributions
}

/// Strip one trailing `.` `;` `,` from a series name or volume, then trim.
fn trim_series_value(value: &str) -> String {
    value
        .strip_suffix(['.', ';', ','])
        .unwrap_or(value)
        .trim()
        .to_string()
}

/// 490 and 830 — series statements sharing one shape; 490 contributes to
/// the record's series list, 830 to the original-series list.
fn decode_series(field: &RawField, subfields: &[Subfield], original: bool) -> Vec<Contribution> {
    let mut name = String::new();
    let mut volume = None;
    for subfield in subfields {
        match subfield.code {
            'a' => name = trim_series_value(&subfield.value),
            'v' => volume = Some(trim_series_value(&subfield.value)),
            _ => warn_unhandled_subfield(field, subfield),
        }
    }
    if name.is_empty() {
        return Vec::new();
    }
    let entry = Series { name, volume };
    if original {
        vec![Contribution::OriginalSeriesList(vec![entry])]
    } else {
        vec![Contribution::Series(vec![entry])]
    }
}

/// 800 — series added entry under a personal name. The series title sits
/// in subfield `t`, and the contribution is a bare record rather than a
/// list (the shape downstream consumers have always received from this
/// tag; see [`crate::book::OriginalSeries`]).
fn decode_series_personal_name(field: &RawField, subfields: &[Subfield]) -> Vec<Contribution> {
    let mut name = String::new();
    let mut volume = None;
    for subfield in subfields {
        match subfield.code {
            't' => name = trim_series_value(&subfield.value),
            'v' => volume = Some(trim_series_value(&subfield.value)),
            _ => warn_unhandled_subfield(field, subfield),
        }
    }
    if name.is_empty() {
        return Vec::new();
    }
    vec![Contribution::OriginalSeriesEntry(Series { name, volume })]
}

/// 852 — shelf location.
fn decode_holding_location(field: &RawField, subfields: &[Subfield]) -> Vec<Contribution> {
    let mut location = String::new();
    for subfield in subfields {
        match subfield.code {
            'a' => location = subfield.value.trim().to_string(),
            _ => warn_unhandled_subfield(field, subfield),
        }
    }
    if location.is_empty() {
        Vec::new()
    } else {
        vec![Contribution::Location(location)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::OriginalSeries;
    use crate::edition::Edition;
    use crate::person::Person;

    fn decode(field: &RawField) -> Vec<Contribution> {
        decode_field(field).expect("well-shaped field")
    }

    // ========================================================================
    // Classification plumbing
    // ========================================================================

    #[test]
    fn test_ignored_and_unhandled_tags_contribute_nothing() {
        let ignored = RawField::builder("500", "  ").subfield('a', "note").build();
        let unknown = RawField::builder("123", "  ").subfield('a', "data").build();
        assert!(decode(&ignored).is_empty());
        assert!(decode(&unknown).is_empty());
    }

    #[test]
    fn test_shape_mismatch_is_an_error() {
        let control_as_data = RawField::builder("008", "  ").subfield('a', "x").build();
        assert_eq!(
            decode_field(&control_as_data),
            Err(DecodeError::ExpectedControlField {
                tag: "008".to_string()
            })
        );

        let data_as_control = RawField::control("245", "not subfields");
        assert_eq!(
            decode_field(&data_as_control),
            Err(DecodeError::ExpectedDataField {
                tag: "245".to_string()
            })
        );
    }

    // ========================================================================
    // 008 fixed data
    // ========================================================================

    fn fixed(data: &str) -> Vec<Contribution> {
        decode(&RawField::control("008", data))
    }

    #[test]
    fn test_fixed_data_single_year() {
        let contributions = fixed("      e19871999        eng|");
        assert_eq!(
            contributions[0],
            Contribution::PublishingInformation(PublishingInformation {
                year: Some(1987),
                ..PublishingInformation::default()
            }),
            "trailing content after position 10 must not leak into a single-year date"
        );
    }

    #[test]
    fn test_fixed_data_year_range() {
        let contributions = fixed("      d19871999");
        assert_eq!(
            contributions[0],
            Contribution::PublishingInformation(PublishingInformation {
                year: Some(1987),
                year_end: Some(1999),
                ..PublishingInformation::default()
            })
        );
    }

    #[test]
    fn test_fixed_data_reprint() {
        let contributions = fixed("      r19901955");
        assert_eq!(
            contributions[0],
            Contribution::PublishingInformation(PublishingInformation {
                year: Some(1990),
                year_original: Some(1955),
                ..PublishingInformation::default()
            })
        );

        // reprint without a stated original year
        let contributions = fixed("      r1990    ");
        assert_eq!(
            contributions[0],
            Contribution::PublishingInformation(PublishingInformation {
                year: Some(1990),
                ..PublishingInformation::default()
            })
        );
    }

    #[test]
    fn test_fixed_data_no_date_codes() {
        for code in ['b', 'n', '|'] {
            let data = format!("      {code}19871999");
            assert!(fixed(&data).is_empty(), "code {code}");
        }
    }

    #[test]
    fn test_fixed_data_unknown_date_type() {
        assert!(fixed("      z1987").is_empty());
        assert!(fixed("short").is_empty());
    }

    #[test]
    fn test_fixed_data_language() {
        let data = format!("      s1999    {}fin|", " ".repeat(35 - 15));
        let contributions = fixed(&data);
        assert!(contributions.contains(&Contribution::Language(vec!["fin".to_string()])));
    }

    #[test]
    fn test_fixed_data_language_placeholder_skipped() {
        let data = format!("      s1999    {}||||", " ".repeat(35 - 15));
        let contributions = fixed(&data);
        assert_eq!(contributions.len(), 1, "only the publication date");
    }

    // ========================================================================
    // Identifiers and classification
    // ========================================================================

    #[test]
    fn test_isbn_with_qualifier() {
        let field = RawField::builder("020", "  ")
            .subfield('a', "951-0-12345-6")
            .subfield('q', "sid.")
            .build();
        assert_eq!(
            decode(&field),
            vec![Contribution::Isbn(vec![IsbnEntry {
                isbn: "951-0-12345-6".to_string(),
                additional: Some("sid.".to_string()),
            }])]
        );
    }

    #[test]
    fn test_isbn_unknown_subfield_is_skipped() {
        let field = RawField::builder("020", "  ")
            .subfield('a', "951-0-12345-6")
            .subfield('z', "951-0-00000-0")
            .build();
        let contributions = decode(&field);
        assert_eq!(contributions.len(), 1);
    }

    #[test]
    fn test_language_codes() {
        let field = RawField::builder("041", "1 ")
            .subfield('a', "fin")
            .subfield('h', "swe")
            .build();
        assert_eq!(
            decode(&field),
            vec![
                Contribution::Language(vec!["fin".to_string()]),
                Contribution::OriginalLanguage(vec!["swe".to_string()]),
            ]
        );
    }

    #[test]
    fn test_udc_number_joins_first_auxiliary_only() {
        let field = RawField::builder("080", "  ")
            .subfield('a', "894.541")
            .subfield('x', "(02)")
            .subfield('x', "(075)")
            .subfield('a', "82")
            .subfield('2', "1974/fin/fennica")
            .build();
        assert_eq!(
            decode(&field),
            vec![Contribution::UdkClass("894.541 (02) 82".to_string())]
        );
    }

    #[test]
    fn test_ykl_requires_scheme_confirmation() {
        let confirmed = RawField::builder("084", "  ")
            .subfield('a', "84.2")
            .subfield('2', "ykl")
            .build();
        assert_eq!(
            decode(&confirmed),
            vec![Contribution::YklClass(vec!["84.2".to_string()])]
        );

        let unconfirmed = RawField::builder("084", "  ")
            .subfield('a', "84.2")
            .subfield('2', "udk")
            .build();
        assert!(decode(&unconfirmed).is_empty());

        let missing_scheme = RawField::builder("084", "  ").subfield('a', "84.2").build();
        assert!(decode(&missing_scheme).is_empty());
    }

    // ========================================================================
    // People
    // ========================================================================

    #[test]
    fn test_main_author() {
        let field = RawField::builder("100", "1 ")
            .subfield('a', "Waltari, Mika.")
            .subfield('d', "1908-1979.")
            .subfield('e', "kirjoittaja.")
            .build();
        assert_eq!(
            decode(&field),
            vec![Contribution::Author(vec![Person {
                lastname: "Waltari".to_string(),
                firstname: Some("Mika".to_string()),
                additional: vec!["kirjoittaja.".to_string()],
            }])]
        );
    }

    #[test]
    fn test_main_author_provisional_rejected() {
        let field = RawField::builder("100", "1 ")
            .subfield('a', "Virtanen, Matti, ennakkotieto")
            .subfield('e', "kirjoittaja.")
            .build();
        assert!(decode(&field).is_empty());
    }

    #[test]
    fn test_main_author_relator_before_heading_is_dropped() {
        let field = RawField::builder("100", "1 ")
            .subfield('e', "toimittaja.")
            .subfield('a', "Virtanen, Matti")
            .build();
        let contributions = decode(&field);
        match &contributions[0] {
            Contribution::Author(people) => assert!(people[0].additional.is_empty()),
            other => panic!("expected an author contribution, got {other:?}"),
        }
    }

    #[test]
    fn test_added_author_per_heading() {
        let field = RawField::builder("700", "1 ")
            .subfield('a', "Jäntti, Lauri.")
            .subfield('a', "Kivi, Aleksis.")
            .subfield('0', "(FIN11)000123456")
            .build();
        let contributions = decode(&field);
        assert_eq!(contributions.len(), 2);
        assert_eq!(
            contributions[0],
            Contribution::Coauthors(vec![Person {
                lastname: "Jäntti".to_string(),
                firstname: Some("Lauri".to_string()),
                additional: vec![],
            }])
        );
    }

    #[test]
    fn test_added_author_provisional_rejected() {
        let field = RawField::builder("700", "1 ")
            .subfield('a', "Virtanen, Matti, ennakkotieto 2024")
            .build();
        assert!(decode(&field).is_empty());
    }

    // ========================================================================
    // Titles
    // ========================================================================

    #[test]
    fn test_uniform_title_strips_comma() {
        let field = RawField::builder("240", "10")
            .subfield('a', "Krig och fred,")
            .build();
        assert_eq!(
            decode(&field),
            vec![Contribution::OriginalTitle("Krig och fred".to_string())]
        );
    }

    #[test]
    fn test_title_statement_simple() {
        let field = RawField::builder("245", "10")
            .subfield('a', "Seitsemän veljestä /")
            .subfield('c', "Aleksis Kivi.")
            .build();
        assert_eq!(
            decode(&field),
            vec![Contribution::Title("Seitsemän veljestä".to_string())]
        );
    }

    #[test]
    fn test_title_statement_with_subtitle() {
        let field = RawField::builder("245", "10")
            .subfield('a', "Suomen historia :")
            .subfield('b', "kivikaudesta nykypäivään /")
            .build();
        assert_eq!(
            decode(&field),
            vec![Contribution::Title(
                "Suomen historia : kivikaudesta nykypäivään".to_string()
            )]
        );
    }

    #[test]
    fn test_title_statement_part_of_series() {
        let field = RawField::builder("245", "10")
            .subfield('a', "Suuri maailmanhistoria.")
            .subfield('n', "Osa 3,")
            .subfield('p', "Antiikin maailma /")
            .build();
        let contributions = decode(&field);
        assert_eq!(
            contributions[0],
            Contribution::Series(vec![Series {
                name: "Suuri maailmanhistoria".to_string(),
                volume: Some("Osa 3".to_string()),
            }])
        );
        assert_eq!(
            contributions[1],
            Contribution::Title("Suuri maailmanhistoria, Osa 3 - Antiikin maailma".to_string())
        );
    }

    #[test]
    fn test_title_statement_part_of_series_with_subtitle() {
        let field = RawField::builder("245", "10")
            .subfield('a', "Suuri maailmanhistoria.")
            .subfield('b', "uusi laitos.")
            .subfield('n', "Osa 3,")
            .subfield('p', "Antiikin maailma /")
            .build();
        let contributions = decode(&field);
        assert_eq!(contributions.len(), 3);
        assert_eq!(
            contributions[1],
            Contribution::Series(vec![Series {
                name: "uusi laitos".to_string(),
                volume: None,
            }])
        );
        assert_eq!(
            contributions[2],
            Contribution::Title(
                "Suuri maailmanhistoria; uusi laitos, Osa 3 - Antiikin maailma".to_string()
            )
        );
    }

    #[test]
    fn test_title_statement_part_name_without_volume() {
        let field = RawField::builder("245", "10")
            .subfield('a', "Kootut teokset.")
            .subfield('p', "Runot")
            .build();
        assert_eq!(
            decode(&field),
            vec![Contribution::Title("Kootut teokset Runot".to_string())]
        );
    }

    #[test]
    fn test_varying_title_is_a_continuation() {
        let field = RawField::builder("246", "1 ")
            .subfield('i', "Selkänimeke:")
            .subfield('a', "Kalevala")
            .build();
        assert_eq!(
            decode(&field),
            vec![Contribution::Title(" - Kalevala".to_string())]
        );
    }

    #[test]
    fn test_varying_title_suppressed_indicators() {
        for indicator in ["0 ", "2 "] {
            let field = RawField::builder("246", indicator)
                .subfield('a', "Kalevala")
                .build();
            assert!(decode(&field).is_empty(), "indicator {indicator:?}");
        }
    }

    // ========================================================================
    // Edition, imprint, physical description
    // ========================================================================

    #[test]
    fn test_edition_statement() {
        let field = RawField::builder("250", "  ").subfield('a', "2. uud. p.").build();
        match &decode(&field)[0] {
            Contribution::Edition(info) => {
                assert_eq!(
                    info.editions,
                    vec![Edition {
                        edition: 2,
                        year: None
                    }]
                );
                assert_eq!(info.raw, "2. uud. p.");
            }
            other => panic!("expected an edition contribution, got {other:?}"),
        }
    }

    #[test]
    fn test_publication_full_imprint() {
        let field = RawField::builder("260", "  ")
            .subfield('a', "Porvoo :")
            .subfield('b', "WSOY,")
            .subfield('c', "1987.")
            .build();
        assert_eq!(
            decode(&field),
            vec![Contribution::PublishingInformation(PublishingInformation {
                place: Some("Porvoo".to_string()),
                publisher: Some("WSOY".to_string()),
                year: Some(1987),
                ..PublishingInformation::default()
            })]
        );
    }

    #[test]
    fn test_publication_sentinels_suppressed() {
        let field = RawField::builder("260", "  ")
            .subfield('a', "[S.l.] :")
            .subfield('b', "[s.n.]")
            .subfield('c', "[1987]")
            .build();
        // "[S.l.] :" is not the bare sentinel, so only the brackets go
        assert_eq!(
            decode(&field),
            vec![Contribution::PublishingInformation(PublishingInformation {
                place: Some("S.l.".to_string()),
                year: Some(1987),
                ..PublishingInformation::default()
            })]
        );

        let field = RawField::builder("260", "  ")
            .subfield('a', "[S.l.]")
            .subfield('b', "[s.n.]")
            .build();
        assert_eq!(
            decode(&field),
            vec![Contribution::PublishingInformation(
                PublishingInformation::default()
            )]
        );
    }

    #[test]
    fn test_publication_bracket_removal() {
        let field = RawField::builder("260", "  ")
            .subfield('a', "[Helsinki] :")
            .subfield('b', "[Otava],")
            .build();
        assert_eq!(
            decode(&field),
            vec![Contribution::PublishingInformation(PublishingInformation {
                place: Some("Helsinki".to_string()),
                publisher: Some("Otava".to_string()),
                ..PublishingInformation::default()
            })]
        );
    }

    #[test]
    fn test_publication_year_missing() {
        let field = RawField::builder("260", "  ").subfield('c', "[19--]").build();
        assert_eq!(
            decode(&field),
            vec![Contribution::PublishingInformation(
                PublishingInformation::default()
            )]
        );
    }

    #[test]
    fn test_physical_description() {
        let field = RawField::builder("300", "  ")
            .subfield('a', "335 s. :")
            .subfield('b', "kuv. ;")
            .subfield('c', "21 cm")
            .build();
        assert_eq!(
            decode(&field),
            vec![Contribution::Measurements(Measurements {
                pages: Some(335),
                height: Some(210),
                additional: Some("kuv.".to_string()),
            })]
        );
    }

    #[test]
    fn test_physical_description_millimeters() {
        let field = RawField::builder("300", "  ").subfield('c', "180 mm").build();
        assert_eq!(
            decode(&field),
            vec![Contribution::Measurements(Measurements {
                height: Some(180),
                ..Measurements::default()
            })]
        );
    }

    #[test]
    fn test_physical_description_unparsed_values_dropped() {
        let field = RawField::builder("300", "  ")
            .subfield('a', "335 sivumäärä")
            .subfield('c', "21 x 30 cm")
            .build();
        assert_eq!(
            decode(&field),
            vec![Contribution::Measurements(Measurements::default())]
        );
    }

    // ========================================================================
    // Keywords, series, location
    // ========================================================================

    #[test]
    fn test_topical_subject() {
        let field = RawField::builder("650", " 7")
            .subfield('a', "romaanit")
            .subfield('2', "ysa")
            .build();
        assert_eq!(
            decode(&field),
            vec![Contribution::Keywords(vec!["romaanit".to_string()])]
        );
    }

    #[test]
    fn test_series_statement() {
        let field = RawField::builder("490", "0 ")
            .subfield('a', "Kariston klassikot ;")
            .subfield('v', "12.")
            .build();
        assert_eq!(
            decode(&field),
            vec![Contribution::Series(vec![Series {
                name: "Kariston klassikot".to_string(),
                volume: Some("12".to_string()),
            }])]
        );
    }

    #[test]
    fn test_series_uniform_title_is_original_series_list() {
        let field = RawField::builder("830", " 0")
            .subfield('a', "Penguin classics.")
            .build();
        assert_eq!(
            decode(&field),
            vec![Contribution::OriginalSeriesList(vec![Series {
                name: "Penguin classics".to_string(),
                volume: None,
            }])]
        );
    }

    #[test]
    fn test_series_personal_name_is_bare_entry() {
        let field = RawField::builder("800", "1 ")
            .subfield('t', "Collected works ;")
            .subfield('v', "3,")
            .build();
        assert_eq!(
            decode(&field),
            vec![Contribution::OriginalSeriesEntry(Series {
                name: "Collected works".to_string(),
                volume: Some("3".to_string()),
            })]
        );
    }

    #[test]
    fn test_series_without_name_contributes_nothing() {
        let field = RawField::builder("490", "0 ").subfield('v', "12").build();
        assert!(decode(&field).is_empty());
        let field = RawField::builder("800", "1 ").subfield('v', "12").build();
        assert!(decode(&field).is_empty());
    }

    #[test]
    fn test_holding_location() {
        let field = RawField::builder("852", "  ")
            .subfield('a', "  Kansalliskokoelma ")
            .build();
        assert_eq!(
            decode(&field),
            vec![Contribution::Location("Kansalliskokoelma".to_string())]
        );

        let empty = RawField::builder("852", "  ").subfield('a', "   ").build();
        assert!(decode(&empty).is_empty());
    }

    // ========================================================================
    // decode_record
    // ========================================================================

    #[test]
    fn test_decode_record_requires_a_title() {
        let fields = vec![RawField::builder("246", "02")
            .subfield('a', "Kalevala")
            .build()];
        let record = decode_record("1", &fields).unwrap();
        assert!(record.is_none(), "a suppressed 246 leaves the record untitled");
    }

    #[test]
    fn test_decode_record_original_series_shapes() {
        let fields = vec![
            RawField::builder("245", "10").subfield('a', "Teos").build(),
            RawField::builder("830", " 0").subfield('a', "Sarja.").build(),
        ];
        let record = decode_record("1", &fields).unwrap().unwrap();
        assert!(matches!(
            record.original_series,
            Some(OriginalSeries::List(_))
        ));

        let fields = vec![
            RawField::builder("245", "10").subfield('a', "Teos").build(),
            RawField::builder("800", "1 ").subfield('t', "Sarja.").build(),
        ];
        let record = decode_record("1", &fields).unwrap().unwrap();
        assert!(matches!(
            record.original_series,
            Some(OriginalSeries::Entry(_))
        ));
    }
}
