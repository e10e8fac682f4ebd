//! Edition statements and their parser.
//!
//! Finnish catalog records state editions as `"3. p. 1987"`, `"2. uud. p."`
//! (revised), `"3.-5. p. 1990"` (a range of printings sharing a year) or
//! spelled out as an ordinal word, `"Toinen painos."`. The parser expands
//! ranges into one entry per printing and always keeps the raw statement —
//! an empty edition list with a raw string means "statement present but
//! unparsed", which downstream consumers may still want to show.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One printing: an edition number and, when stated, its year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edition {
    /// Edition (printing) number
    pub edition: u32,
    /// Year of this printing, when the statement carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
}

/// A parsed edition statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditionInfo {
    /// Parsed printings, possibly empty
    pub editions: Vec<Edition>,
    /// The original statement, verbatim
    pub raw: String,
}

/// Ordinal words the catalog spells editions with, in edition order.
const ORDINAL_WORDS: [&str; 10] = [
    "Ensimmäinen",
    "Toinen",
    "Kolmas",
    "Neljäs",
    "Viides",
    "Kuudes",
    "Seitsemäs",
    "Kahdeksas",
    "Yhdeksäs",
    "Kymmenes",
];

lazy_static! {
    /// `"N."` or `"N.-M."`, optional `"uud."`, `"p."`/`"painos."`, optional year.
    static ref EDITION_RE: Regex =
        Regex::new(r"([0-9]{1,2})\.(?:-([0-9]{1,2})\.)?(?: uud\.)? p(?:ainos)?\.(?: ([0-9]{4}))?")
            .expect("edition pattern is valid");
    static ref ORDINAL_RE: Regex = Regex::new(&format!(
        r"({}) p(?:ainos)?\.",
        ORDINAL_WORDS.join("|")
    ))
    .expect("ordinal pattern is valid");
}

/// Parse a free-text edition statement.
///
/// Every non-overlapping numeric match contributes one entry per integer in
/// its range, all sharing the match's year. When nothing numeric matches,
/// a spelled-out ordinal (`"Toinen painos."`) contributes a single entry
/// with no year.
///
/// # Examples
///
/// ```
/// use fennica::edition::parse_statement;
///
/// let info = parse_statement("3.-5. p. 1990");
/// let numbers: Vec<u32> = info.editions.iter().map(|e| e.edition).collect();
/// assert_eq!(numbers, vec![3, 4, 5]);
/// assert!(info.editions.iter().all(|e| e.year == Some(1990)));
///
/// assert!(parse_statement("Näköispainos.").editions.is_empty());
/// ```
#[must_use]
pub fn parse_statement(input: &str) -> EditionInfo {
    let mut info = EditionInfo {
        editions: Vec::new(),
        raw: input.to_string(),
    };

    for captures in EDITION_RE.captures_iter(input) {
        let start: u32 = captures[1].parse().expect("1-2 digits fit in u32");
        let end: Option<u32> = captures.get(2).map(|m| {
            m.as_str().parse().expect("1-2 digits fit in u32")
        });
        let year: Option<u32> = captures.get(3).map(|m| {
            m.as_str().parse().expect("4 digits fit in u32")
        });
        match end {
            Some(end) => {
                for edition in start..=end {
                    info.editions.push(Edition { edition, year });
                }
            }
            None => info.editions.push(Edition {
                edition: start,
                year,
            }),
        }
    }

    if info.editions.is_empty() {
        if let Some(captures) = ORDINAL_RE.captures(input) {
            let position = ORDINAL_WORDS
                .iter()
                .position(|word| *word == &captures[1])
                .expect("alternation only matches table words");
            info.editions.push(Edition {
                edition: u32::try_from(position).expect("table has ten entries") + 1,
                year: None,
            });
        }
    }

    info
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(info: &EditionInfo) -> Vec<u32> {
        info.editions.iter().map(|e| e.edition).collect()
    }

    #[test]
    fn test_single_edition_with_year() {
        let info = parse_statement("3. p. 1987");
        assert_eq!(info.editions, vec![Edition { edition: 3, year: Some(1987) }]);
        assert_eq!(info.raw, "3. p. 1987");
    }

    #[test]
    fn test_range_shares_year() {
        let info = parse_statement("3.-5. p. 1990");
        assert_eq!(numbers(&info), vec![3, 4, 5]);
        assert!(info.editions.iter().all(|e| e.year == Some(1990)));
    }

    #[test]
    fn test_revised_marker() {
        let info = parse_statement("2. uud. p.");
        assert_eq!(info.editions, vec![Edition { edition: 2, year: None }]);
    }

    #[test]
    fn test_painos_spelled_out() {
        let info = parse_statement("4. painos. 2001");
        assert_eq!(info.editions, vec![Edition { edition: 4, year: Some(2001) }]);
    }

    #[test]
    fn test_multiple_matches_accumulate() {
        let info = parse_statement("1. p. 1980, 2. p. 1985");
        assert_eq!(numbers(&info), vec![1, 2]);
        assert_eq!(info.editions[0].year, Some(1980));
        assert_eq!(info.editions[1].year, Some(1985));
    }

    #[test]
    fn test_ordinal_fallback() {
        let info = parse_statement("Toinen p.");
        assert_eq!(info.editions, vec![Edition { edition: 2, year: None }]);

        let info = parse_statement("Kymmenes painos.");
        assert_eq!(info.editions, vec![Edition { edition: 10, year: None }]);
    }

    #[test]
    fn test_ordinal_not_used_when_numeric_matched() {
        let info = parse_statement("Toinen p. ja 3. p. 1999");
        assert_eq!(numbers(&info), vec![3]);
    }

    #[test]
    fn test_unmatched_preserves_raw() {
        let info = parse_statement("Näköispainos vuoden 1870 laitoksesta.");
        assert!(info.editions.is_empty());
        assert_eq!(info.raw, "Näköispainos vuoden 1870 laitoksesta.");
    }
}
