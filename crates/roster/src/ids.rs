//! Identifier allocation.

use std::path::Path;

use crate::error::{Error, Result};
use crate::record::Record;

/// Identifier handed to the first record of an empty store.
pub const FIRST_ID: &str = "1";

/// Derive the id for the next record: one past the largest numeric id.
///
/// `source` only labels errors with the data file they came from.
///
/// # Errors
///
/// Returns [`Error::Format`] if any existing id is not a non-negative integer,
/// or if the next id would overflow.
pub fn next_id(records: &[Record], source: &Path) -> Result<String> {
    let mut max: Option<u64> = None;
    for record in records {
        let non_numeric =
            || Error::format(source, None, format!("non-numeric id '{}'", record.id));
        // `u64::from_str` accepts a leading '+'
        if !record.id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(non_numeric());
        }
        let n: u64 = record.id.parse().map_err(|_| non_numeric())?;
        max = Some(max.map_or(n, |m| m.max(n)));
    }

    match max {
        None => Ok(FIRST_ID.to_string()),
        Some(m) => m
            .checked_add(1)
            .map(|next| next.to_string())
            .ok_or_else(|| Error::format(source, None, format!("id {m} cannot be incremented"))),
    }
}
