//! Raw catalog field structures.
//!
//! This module provides the input-side types for decoding:
//! - [`RawField`] — one tagged field as presented by the catalog's staff view
//! - [`FieldContent`] — fixed-width control value or indicator + subfields
//! - [`Subfield`] — a (code, value) pair within a data field
//!
//! Subfield order within a field is significant (tags 245 and 300 compose
//! position-sensitively), and field order across a record is significant for
//! the assembler, so records are handed to the decoder as a flat ordered
//! sequence of `RawField` values.
//!
//! # Examples
//!
//! Build fields with the builder API:
//!
//! ```
//! use fennica::RawField;
//!
//! let title = RawField::builder("245", "10")
//!     .subfield('a', "Kalevala /")
//!     .subfield('c', "Elias Lönnrot.")
//!     .build();
//! let fixed = RawField::control("008", "      s1999    fi |||||||||||||||f|fin|c");
//!
//! assert!(!title.is_control_field());
//! assert!(fixed.is_control_field());
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A subfield within a data field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subfield {
    /// Subfield code (single letter or digit)
    pub code: char,
    /// Subfield value
    pub value: String,
}

/// Content of a raw field: either one fixed-width string or subfield data.
///
/// The catalog's staff view renders control fields (such as 008) as a single
/// run of text with no indicator, and data fields as an indicator followed by
/// coded subfields. The distinction is structural, so it is carried in the
/// type rather than a flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldContent {
    /// A fixed-width control value, interpreted by character position.
    Control(String),
    /// Indicator characters and ordered subfields.
    Data {
        /// Indicator characters, in presentation order (usually two).
        indicator: SmallVec<[char; 2]>,
        /// Subfields in presentation order (stored in `SmallVec` to avoid
        /// allocation for typical fields with 4 or fewer subfields).
        subfields: SmallVec<[Subfield; 4]>,
    },
}

/// One raw tagged field pulled from a rendered catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawField {
    /// Field tag (3 digits)
    pub tag: String,
    /// Field content
    pub content: FieldContent,
}

impl RawField {
    /// Create a control field from its fixed-width value.
    #[must_use]
    pub fn control(tag: &str, value: &str) -> Self {
        RawField {
            tag: tag.to_string(),
            content: FieldContent::Control(value.to_string()),
        }
    }

    /// Create an empty data field with the given indicator characters.
    #[must_use]
    pub fn data(tag: &str, indicator: &str) -> Self {
        RawField {
            tag: tag.to_string(),
            content: FieldContent::Data {
                indicator: indicator.chars().collect(),
                subfields: SmallVec::new(),
            },
        }
    }

    /// Create a builder for fluently constructing data fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use fennica::RawField;
    ///
    /// let field = RawField::builder("650", " 7")
    ///     .subfield('a', "romaanit")
    ///     .subfield('2', "ysa")
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder(tag: &str, indicator: &str) -> RawFieldBuilder {
        RawFieldBuilder {
            field: Self::data(tag, indicator),
        }
    }

    /// Whether this field carries a fixed-width control value.
    #[must_use]
    pub fn is_control_field(&self) -> bool {
        matches!(self.content, FieldContent::Control(_))
    }

    /// Indicator characters, empty for control fields.
    #[must_use]
    pub fn indicator(&self) -> &[char] {
        match &self.content {
            FieldContent::Control(_) => &[],
            FieldContent::Data { indicator, .. } => indicator,
        }
    }

    /// Indicator characters joined into a string, empty for control fields.
    ///
    /// Used in diagnostics, which report fields as `indicator:tag`.
    #[must_use]
    pub fn indicator_string(&self) -> String {
        match &self.content {
            FieldContent::Control(_) => String::new(),
            FieldContent::Data { indicator, .. } => indicator.iter().collect(),
        }
    }

    /// Add a subfield to a data field.
    ///
    /// Has no effect on a control field.
    pub fn add_subfield(&mut self, code: char, value: &str) {
        if let FieldContent::Data { subfields, .. } = &mut self.content {
            subfields.push(Subfield {
                code,
                value: value.to_string(),
            });
        }
    }

    /// Get first value for a subfield code, if this is a data field.
    #[must_use]
    pub fn get_subfield(&self, code: char) -> Option<&str> {
        match &self.content {
            FieldContent::Control(_) => None,
            FieldContent::Data { subfields, .. } => subfields
                .iter()
                .find(|sf| sf.code == code)
                .map(|sf| sf.value.as_str()),
        }
    }
}

/// Builder for fluently constructing raw data fields.
///
/// # Examples
///
/// ```
/// use fennica::RawField;
///
/// let field = RawField::builder("100", "1 ")
///     .subfield('a', "Waltari, Mika,")
///     .subfield('d', "1908-1979.")
///     .build();
/// ```
#[derive(Debug)]
pub struct RawFieldBuilder {
    field: RawField,
}

impl RawFieldBuilder {
    /// Add a subfield to the field being built.
    #[must_use]
    pub fn subfield(mut self, code: char, value: &str) -> Self {
        self.field.add_subfield(code, value);
        self
    }

    /// Build the field.
    #[must_use]
    pub fn build(self) -> RawField {
        self.field
    }
}
