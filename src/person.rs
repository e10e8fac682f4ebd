//! Person names and the catalog name parser.
//!
//! Personal names arrive as comma-separated headings of the form
//! `"Lastname, Firstname, qualifier, …"`. The parser strips cataloging
//! punctuation while preserving initials (`"M."` keeps its period) and
//! collects trailing qualifier segments as additional info.
//!
//! A heading whose qualifiers mark the record as provisional (the catalog
//! annotates forthcoming titles with `ennakkotieto`) is **rejected**: the
//! outcome is [`NameParse::Rejected`], a distinct variant rather than an
//! error or an empty person, and the calling decoder drops the whole
//! contribution.

use serde::{Deserialize, Serialize};

/// Marker the catalog places on provisional (forthcoming) records.
const PROVISIONAL_MARKER: &str = "ennakkotieto";

/// A person referenced by a catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Family name
    pub lastname: String,
    /// Given name, kept verbatim apart from punctuation stripping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    /// Qualifier segments (titles, roles, dates rendered as text)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional: Vec<String>,
}

impl Person {
    /// Create a person from a family name alone.
    #[must_use]
    pub fn new(lastname: &str) -> Self {
        Person {
            lastname: lastname.to_string(),
            firstname: None,
            additional: Vec::new(),
        }
    }

    /// Format as `"Lastname, Firstname"` (or just the family name).
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.firstname {
            Some(firstname) if !firstname.is_empty() => {
                format!("{}, {}", self.lastname, firstname)
            }
            _ => self.lastname.clone(),
        }
    }
}

/// Outcome of parsing a personal name heading.
///
/// Rejection is a first-class outcome, not an error: a provisional-record
/// marker means "this field contributes nothing", and decoding continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameParse {
    /// The heading parsed into a person.
    Accepted(Person),
    /// The heading marks a provisional record; drop the contribution.
    Rejected,
}

impl NameParse {
    /// The parsed person, if the heading was accepted.
    #[must_use]
    pub fn accepted(self) -> Option<Person> {
        match self {
            NameParse::Accepted(person) => Some(person),
            NameParse::Rejected => None,
        }
    }
}

/// Strip one trailing period.
fn strip_period(value: &str) -> &str {
    value.strip_suffix('.').unwrap_or(value)
}

/// Strip one trailing period unless it follows an uppercase letter.
///
/// `"Matti."` becomes `"Matti"`, while the initial `"M."` is left intact.
fn strip_period_after_lowercase(value: &str) -> &str {
    match value.strip_suffix('.') {
        Some(stripped) => match stripped.chars().last() {
            Some(preceding) if preceding.is_ascii_uppercase() => value,
            Some(_) => stripped,
            None => value,
        },
        None => value,
    }
}

/// Parse a comma-separated personal name heading.
///
/// Segment 0 is the family name, segment 1 the given name, and every later
/// non-empty segment lands in the additional-info list. A later segment
/// containing the provisional-record marker rejects the whole heading.
///
/// # Examples
///
/// ```
/// use fennica::person::{parse_name, NameParse};
///
/// let parsed = parse_name("Virtanen, Matti.");
/// match parsed {
///     NameParse::Accepted(person) => {
///         assert_eq!(person.lastname, "Virtanen");
///         assert_eq!(person.firstname.as_deref(), Some("Matti"));
///     }
///     NameParse::Rejected => panic!("not a provisional heading"),
/// }
///
/// assert_eq!(parse_name("Virtanen, Matti, ennakkotieto"), NameParse::Rejected);
/// ```
#[must_use]
pub fn parse_name(heading: &str) -> NameParse {
    let mut person = Person::new("");
    for (index, segment) in heading.split(',').enumerate() {
        let segment = segment.trim();
        match index {
            0 => person.lastname = strip_period(segment).to_string(),
            1 => person.firstname = Some(strip_period_after_lowercase(segment).to_string()),
            _ => {
                if segment.is_empty() {
                    continue;
                }
                let cleaned = strip_period(segment);
                if cleaned.contains(PROVISIONAL_MARKER) {
                    return NameParse::Rejected;
                }
                person.additional.push(cleaned.to_string());
            }
        }
    }
    NameParse::Accepted(person)
}
