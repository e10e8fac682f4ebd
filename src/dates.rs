//! Publication date codes and year scanning.
//!
//! The 008 fixed field encodes how its two date slots are to be read via a
//! one-character type code at position 6. This module gives that code a
//! closed vocabulary, [`DateType`], and provides [`first_year`], the
//! four-digit scan used for free-text publication dates such as
//! `"Porvoo ; Helsinki : WSOY, 1987."`.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// How the 008 field's date slots are interpreted.
///
/// Codes sharing an interpretation collapse onto one variant; codes meaning
/// "no usable date" map to [`DateType::NoDate`] so the decoder can skip
/// them without a warning. An unknown code yields `None` from
/// [`DateType::from_code`] and is reported by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateType {
    /// One publication year in positions 7-10 (codes `c e q s t u`)
    Single,
    /// Publication span: start in 7-10, end in 11-14 (codes `d m`)
    Range,
    /// Reprint year in 7-10, original year in 11-14 (code `r`)
    Reprint,
    /// No date available (codes `b n |`)
    NoDate,
}

impl DateType {
    /// Look up the interpretation for a position-6 type code.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'c' | 'e' | 'q' | 's' | 't' | 'u' => Some(Self::Single),
            'd' | 'm' => Some(Self::Range),
            'r' => Some(Self::Reprint),
            'b' | 'n' | '|' => Some(Self::NoDate),
            _ => None,
        }
    }
}

lazy_static! {
    static ref YEAR_RE: Regex = Regex::new(r"[0-9]{4}").expect("year pattern is valid");
}

/// First run of four digits in a string, parsed as a year.
///
/// # Examples
///
/// ```
/// use fennica::dates::first_year;
///
/// assert_eq!(first_year("Porvoo : WSOY, 1987."), Some(1987));
/// assert_eq!(first_year("[198-?]"), None);
/// ```
#[must_use]
pub fn first_year(text: &str) -> Option<u32> {
    YEAR_RE.find(text).and_then(|m| m.as_str().parse().ok())
}

/// Parse a fixed-width digit slot of the 008 field, such as positions 7-10.
///
/// Returns `None` when the slot is missing, blank or not a number.
#[must_use]
pub fn fixed_year(data: &str, range: std::ops::Range<usize>) -> Option<u32> {
    data.get(range).and_then(|slot| slot.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_type_codes() {
        for code in ['c', 'e', 'q', 's', 't', 'u'] {
            assert_eq!(DateType::from_code(code), Some(DateType::Single));
        }
        assert_eq!(DateType::from_code('d'), Some(DateType::Range));
        assert_eq!(DateType::from_code('m'), Some(DateType::Range));
        assert_eq!(DateType::from_code('r'), Some(DateType::Reprint));
        for code in ['b', 'n', '|'] {
            assert_eq!(DateType::from_code(code), Some(DateType::NoDate));
        }
        assert_eq!(DateType::from_code('x'), None);
        assert_eq!(DateType::from_code(' '), None);
    }

    #[test]
    fn test_first_year() {
        assert_eq!(first_year("1987"), Some(1987));
        assert_eq!(first_year("Porvoo : WSOY, 1987."), Some(1987));
        assert_eq!(first_year("19871999"), Some(1987));
        assert_eq!(first_year("[198-?]"), None);
        assert_eq!(first_year(""), None);
    }

    #[test]
    fn test_fixed_year() {
        assert_eq!(fixed_year("      s1999    ", 7..11), Some(1999));
        assert_eq!(fixed_year("      d19871999", 11..15), Some(1999));
        assert_eq!(fixed_year("      s19xx", 7..11), None);
        assert_eq!(fixed_year("short", 7..11), None);
        assert_eq!(fixed_year("      s    ", 7..11), None);
    }
}
