//! Tabular emitter
//!
//! Renders canonical records as CSV: one header row of snake_case column
//! names, then one row per record in declaration order. Text cells go
//! through the mojibake repairer here and nowhere else.

use crate::encoding::repair_mojibake;
use crate::error::{MigrationError, MigrationResult};
use std::borrow::Cow;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// One value of an emitted row
#[derive(Debug, Clone, PartialEq)]
pub enum Cell<'a> {
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Free text, repaired before writing
    Text(&'a str),
    /// Canonical enumeration name, written as is
    Name(&'static str),
}

impl Cell<'_> {
    fn render(&self) -> MigrationResult<Cow<'_, str>> {
        Ok(match self {
            Cell::Int(v) => Cow::Owned(v.to_string()),
            Cell::Float(v) => Cow::Owned(v.to_string()),
            Cell::Bool(true) => Cow::Borrowed("1"),
            Cell::Bool(false) => Cow::Borrowed("0"),
            Cell::Text(text) => repair_mojibake(text)?,
            Cell::Name(name) => Cow::Borrowed(*name),
        })
    }
}

/// A canonical record that can be written as one CSV row
pub trait TabularRecord {
    /// Entity name used in error context
    const ENTITY: &'static str;
    /// Field names in declaration order
    const FIELDS: &'static [&'static str];

    /// Cell values, one per entry of `FIELDS`
    fn cells(&self) -> Vec<Cell<'_>>;
}

/// Convert a camelCase identifier to snake_case
pub fn camel_to_snake(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        out.push(c);
        let next = chars.get(i + 1).copied();
        let after = chars.get(i + 2).copied();
        let boundary = match (next, after) {
            (Some(n), Some(a)) => {
                (c.is_ascii_lowercase() && n.is_ascii_uppercase() && a.is_ascii_alphabetic())
                    || (c.is_ascii_uppercase() && n.is_ascii_uppercase() && a.is_ascii_lowercase())
            }
            _ => false,
        };
        if boundary {
            out.push('_');
        }
    }

    out.to_lowercase()
}

/// Header row for `R`
pub fn header<R: TabularRecord>() -> Vec<String> {
    R::FIELDS.iter().map(|field| camel_to_snake(field)).collect()
}

/// Render records as CSV bytes; the header is written even with no records
pub fn render_csv<R: TabularRecord>(records: &[R]) -> MigrationResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(header::<R>())?;

    for (index, record) in records.iter().enumerate() {
        let cells = record.cells();
        debug_assert_eq!(cells.len(), R::FIELDS.len());

        let mut row: Vec<Cow<'_, str>> = Vec::with_capacity(cells.len());
        for (field, cell) in R::FIELDS.iter().zip(&cells) {
            let value = cell.render().map_err(|source| MigrationError::Row {
                entity: R::ENTITY,
                row: index + 1,
                column: camel_to_snake(field),
                source: Box::new(source),
            })?;
            row.push(value);
        }
        writer.write_record(row.iter().map(|v| v.as_bytes()))?;
    }

    writer
        .into_inner()
        .map_err(|e| MigrationError::Io(e.into_error()))
}

/// Write a finished artifact and wait until it is on disk
pub async fn write_artifact(path: &Path, contents: &[u8]) -> MigrationResult<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(contents).await?;
    file.flush().await?;
    file.sync_all().await?;
    debug!(path = %path.display(), bytes = contents.len(), "Artifact written");
    Ok(())
}

/// Render and write one artifact, returning the row count
pub async fn emit<R: TabularRecord>(records: &[R], path: &Path) -> MigrationResult<usize> {
    let contents = render_csv(records)?;
    write_artifact(path, &contents).await?;
    Ok(records.len())
}
