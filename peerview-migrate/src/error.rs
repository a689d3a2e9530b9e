//! Error types for peerview-migrate
//!
//! Errors fall into three severities:
//! - fatal to the run: a snapshot cannot be located before pipelines start
//! - fatal to one entity pipeline: unreadable snapshot, broken lookup,
//!   unresolvable username, unrepairable text, malformed color or timestamp
//! - diagnostic only: normalizer misses, which are logged and never surface here

use std::path::PathBuf;
use thiserror::Error;

/// Migration error type
#[derive(Debug, Error)]
pub enum MigrationError {
    /// Snapshot file for a legacy table does not exist
    #[error("Snapshot for table '{table}' not found at {}", path.display())]
    SnapshotMissing { table: &'static str, path: PathBuf },

    /// Snapshot file exists but could not be read
    #[error("Snapshot for table '{table}' could not be read: {source}")]
    SnapshotRead {
        table: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot content does not match the table's fixed schema
    #[error("Snapshot for table '{table}' is not valid: {source}")]
    SnapshotParse {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Legacy foreign key with no entry in the reference table
    #[error("Broken reference: no {table} row with id {id}")]
    MissingLookup { table: &'static str, id: i64 },

    /// Canvas pixel names an account that does not exist
    #[error("No user with username: {0}")]
    UnknownUsername(String),

    /// Canvas color that is neither hex nor a well-formed rgb() triple
    #[error("Invalid color value: {0}")]
    InvalidColor(String),

    /// Character outside the single-byte model of the encoding repairer
    #[error("Unable to map character {character:?} at position {position} in {text:?} to a Windows-1252 byte")]
    EncodingRepair {
        character: char,
        position: usize,
        text: String,
    },

    /// Record-level failure while serializing one row
    #[error("{entity} row {row}, column {column}: {source}")]
    Row {
        entity: &'static str,
        row: usize,
        column: String,
        #[source]
        source: Box<MigrationError>,
    },

    /// CSV writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// peerview-common error (timestamps, configuration)
    #[error("Common error: {0}")]
    Common(#[from] peerview_common::Error),

    /// Pipeline task ended without producing an outcome
    #[error("Pipeline task aborted: {0}")]
    TaskPanicked(String),
}

/// Result type for migration operations
pub type MigrationResult<T> = Result<T, MigrationError>;
