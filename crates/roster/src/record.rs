//! Core record type for roster.
//!
//! A [`Record`] is one student's stored data. On disk each record is a single
//! line of five `|`-separated fields with no header and no escaping.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Field separator used in the data file.
pub const DELIMITER: char = '|';

/// Number of fields in every stored line.
pub const FIELD_COUNT: usize = 5;

/// A stored student record.
///
/// Every field is kept as text, exactly as it appears in the data file. Input
/// checking happens before a record is built (see [`crate::validation`]), so
/// loading a file never rejects a line for its contents, only for its shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Numeric identifier, unique within the store.
    pub id: String,
    /// Student name.
    pub name: String,
    /// Age in years, as decimal digits.
    pub age: String,
    /// Letter grade, `A` through `F`.
    pub grade: String,
    /// Class section.
    pub section: String,
}

/// Why a line could not be turned into a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCountMismatch {
    /// How many fields the line actually split into.
    pub found: usize,
}

impl fmt::Display for FieldCountMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {FIELD_COUNT} '{DELIMITER}'-separated fields, found {}",
            self.found
        )
    }
}

impl Record {
    /// Build a record from its five fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: impl Into<String>,
        grade: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age: age.into(),
            grade: grade.into(),
            section: section.into(),
        }
    }

    /// Parse one line of the data file.
    ///
    /// Surrounding whitespace (including the trailing newline) is stripped
    /// first, then the line must split into exactly [`FIELD_COUNT`] fields.
    ///
    /// # Errors
    ///
    /// Returns [`FieldCountMismatch`] if the line has too few or too many fields.
    pub fn parse_line(line: &str) -> Result<Self, FieldCountMismatch> {
        let fields: Vec<&str> = line.trim().split(DELIMITER).collect();
        match fields.as_slice() {
            [id, name, age, grade, section] => Ok(Self::new(*id, *name, *age, *grade, *section)),
            _ => Err(FieldCountMismatch {
                found: fields.len(),
            }),
        }
    }

    /// Render this record as one data-file line, without the newline.
    #[must_use]
    pub fn to_line(&self) -> String {
        let d = DELIMITER;
        format!(
            "{}{d}{}{d}{}{d}{}{d}{}",
            self.id, self.name, self.age, self.grade, self.section
        )
    }

    /// Check whether this record carries the given id.
    #[must_use]
    pub fn has_id(&self, id: &str) -> bool {
        self.id == id
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}
