//! Text rendering for command output.
//!
//! Renderers return strings rather than printing, so the binary decides where
//! output goes and tests can compare it directly.

use std::fmt::Write as _;

use crate::error::Result;
use crate::record::Record;

use super::OutputFormat;

/// Message shown when the store holds no records.
pub const EMPTY_STORE_MESSAGE: &str = "No students in the database.";

const HEADERS: [&str; 5] = ["ID", "Name", "Age", "Grade", "Section"];

/// Render a list of records.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn records(records: &[Record], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(records)?);
    }
    if records.is_empty() {
        return Ok(EMPTY_STORE_MESSAGE.to_string());
    }

    Ok(match format {
        OutputFormat::Table => table(records),
        _ => records
            .iter()
            .map(|r| {
                format!(
                    "{} {} (age {}, grade {}, section {})",
                    r.id, r.name, r.age, r.grade, r.section
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    })
}

/// Render a single record.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn record(record: &Record, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(record)?,
        OutputFormat::Table => table(std::slice::from_ref(record)),
        OutputFormat::Plain => {
            let mut out = String::new();
            for (label, value) in HEADERS.iter().zip(fields(record)) {
                let _ = writeln!(out, "{:<9}{value}", format!("{label}:"));
            }
            out.trim_end().to_string()
        }
    })
}

fn fields(record: &Record) -> [&str; 5] {
    [
        &record.id,
        &record.name,
        &record.age,
        &record.grade,
        &record.section,
    ]
}

fn table(records: &[Record]) -> String {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for r in records {
        for (w, value) in widths.iter_mut().zip(fields(r)) {
            *w = (*w).max(value.chars().count());
        }
    }

    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let dashes: Vec<&str> = dashes.iter().map(String::as_str).collect();

    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(table_row(&HEADERS, &widths));
    lines.push(table_row(&dashes, &widths));
    lines.extend(records.iter().map(|r| table_row(&fields(r), &widths)));
    lines.join("\n")
}

fn table_row(cells: &[&str], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}
