//! Input checks applied at the CRUD boundary.
//!
//! Callers hand over raw text in a [`StudentFields`]; [`StudentFields::validate`]
//! either rejects it with [`Error::Validation`] or returns the normalized
//! values that get stored.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Letter grades accepted by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grade {
    /// Grade A.
    A,
    /// Grade B.
    B,
    /// Grade C.
    C,
    /// Grade D.
    D,
    /// Grade E.
    E,
    /// Grade F.
    F,
}

impl Grade {
    /// All grades, best first.
    pub const ALL: [Grade; 6] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    /// The single upper-case letter for this grade.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Grade {
    type Err = Error;

    /// Parse a grade letter, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|g| upper.len() == 1 && upper.starts_with(g.as_char()))
            .ok_or_else(|| Error::validation("grade", "Grade must be A-F!"))
    }
}

/// Raw, unchecked field input for creating or updating a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFields {
    /// Student name.
    pub name: String,
    /// Age in years.
    pub age: String,
    /// Grade letter.
    pub grade: String,
    /// Class section.
    pub section: String,
}

/// Field values that passed validation, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidFields {
    /// Trimmed, non-empty name.
    pub name: String,
    /// Trimmed digit string of a positive age.
    pub age: String,
    /// Parsed grade.
    pub grade: Grade,
    /// Trimmed, non-empty section.
    pub section: String,
}

impl StudentFields {
    /// Bundle raw input for validation.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        grade: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            grade: grade.into(),
            section: section.into(),
        }
    }

    /// Check every field, in the order name, age, grade, section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first field that fails.
    pub fn validate(&self) -> Result<ValidFields> {
        let name = non_empty("name", "Name cannot be empty!", &self.name)?;
        let age = positive_age(&self.age)?;
        let grade: Grade = self.grade.parse()?;
        let section = non_empty("section", "Section cannot be empty!", &self.section)?;

        Ok(ValidFields {
            name,
            age,
            grade,
            section,
        })
    }
}

fn non_empty(field: &'static str, message: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(field, message));
    }
    Ok(trimmed.to_string())
}

fn positive_age(value: &str) -> Result<String> {
    let trimmed = value.trim();
    let invalid = || Error::validation("age", "Age must be a positive integer!");

    // `u32::from_str` accepts a leading '+', so check the digits first.
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match trimmed.parse::<u32>() {
        Ok(n) if n > 0 => Ok(trimmed.to_string()),
        _ => Err(invalid()),
    }
}

/// Reject blank record ids before a lookup is attempted.
///
/// # Errors
///
/// Returns [`Error::Validation`] if `id` is empty after trimming.
pub fn require_id(id: &str) -> Result<&str> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(Error::validation("id", "Please enter a Student ID!"));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, age: &str, grade: &str, section: &str) -> StudentFields {
        StudentFields::new(name, age, grade, section)
    }

    fn field_of(err: &Error) -> &'static str {
        match err {
            Error::Validation { field, .. } => *field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_fields() {
        let valid = fields("Alice", "10", "B", "X").validate().unwrap();
        assert_eq!(valid.name, "Alice");
        assert_eq!(valid.age, "10");
        assert_eq!(valid.grade, Grade::B);
        assert_eq!(valid.section, "X");
    }

    #[test]
    fn test_trims_text_fields() {
        let valid = fields("  Alice  ", " 10 ", " b ", "\tX\n").validate().unwrap();
        assert_eq!(valid.name, "Alice");
        assert_eq!(valid.age, "10");
        assert_eq!(valid.grade, Grade::B);
        assert_eq!(valid.section, "X");
    }

    #[test]
    fn test_empty_name() {
        let err = fields("   ", "10", "B", "X").validate().unwrap_err();
        assert_eq!(field_of(&err), "name");
        assert_eq!(err.to_string(), "Name cannot be empty!");
    }

    #[test]
    fn test_empty_section() {
        let err = fields("Alice", "10", "B", "").validate().unwrap_err();
        assert_eq!(field_of(&err), "section");
    }

    #[test]
    fn test_age_rules() {
        for bad in ["", "0", "-3", "+5", "ten", "1.5", "99999999999"] {
            let err = fields("Alice", bad, "B", "X").validate().unwrap_err();
            assert_eq!(field_of(&err), "age", "age {bad:?} should be rejected");
        }
        let valid = fields("Alice", "007", "B", "X").validate().unwrap();
        assert_eq!(valid.age, "007");
    }

    #[test]
    fn test_grade_rules() {
        for bad in ["", "G", "AB", "1", "a+"] {
            let err = fields("Alice", "10", bad, "X").validate().unwrap_err();
            assert_eq!(field_of(&err), "grade", "grade {bad:?} should be rejected");
        }
        for (raw, grade) in [("a", Grade::A), ("F", Grade::F), ("e", Grade::E)] {
            assert_eq!(raw.parse::<Grade>().unwrap(), grade);
        }
    }

    #[test]
    fn test_first_failing_field_wins() {
        let err = fields("", "0", "Z", "").validate().unwrap_err();
        assert_eq!(field_of(&err), "name");

        let err = fields("Alice", "0", "Z", "").validate().unwrap_err();
        assert_eq!(field_of(&err), "age");

        let err = fields("Alice", "3", "Z", "").validate().unwrap_err();
        assert_eq!(field_of(&err), "grade");
    }

    #[test]
    fn test_grade_display() {
        let letters: String = Grade::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(letters, "ABCDEF");
    }

    #[test]
    fn test_require_id() {
        assert_eq!(require_id(" 7 ").unwrap(), "7");
        let err = require_id("  ").unwrap_err();
        assert_eq!(field_of(&err), "id");
    }
}
