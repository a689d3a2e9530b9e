//! Snapshot loader
//!
//! Reads one legacy table snapshot (a JSON array of row objects) into typed
//! records. A table is returned whole or not at all: any row that fails its
//! schema rejects the snapshot.

use crate::config::MigrationConfig;
use crate::error::{MigrationError, MigrationResult};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Legacy tables exported from the old database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyTable {
    Accounts,
    UserSubjects,
    Notes,
    NoteSubjectJunction,
    Comments,
    FavouritedNotes,
    NoteCreators,
    NoteRatings,
    PlaceCanvas,
    ReadStatus,
    Reports,
    UploadTimeout,
    NotificationThreads,
    Notifications,
    NoteTypes,
    Subjects,
}

impl LegacyTable {
    /// Table name as it appears in the snapshot file name
    pub fn name(&self) -> &'static str {
        match self {
            LegacyTable::Accounts => "accounts",
            LegacyTable::UserSubjects => "usersubjects",
            LegacyTable::Notes => "notes",
            LegacyTable::NoteSubjectJunction => "notesubjectjunction",
            LegacyTable::Comments => "comments",
            LegacyTable::FavouritedNotes => "favouritednotes",
            LegacyTable::NoteCreators => "notecreators",
            LegacyTable::NoteRatings => "noteratings",
            LegacyTable::PlaceCanvas => "placecanvas",
            LegacyTable::ReadStatus => "readstatus",
            LegacyTable::Reports => "reports",
            LegacyTable::UploadTimeout => "uploadtimeout",
            LegacyTable::NotificationThreads => "notification_threads",
            LegacyTable::Notifications => "notifications",
            LegacyTable::NoteTypes => "notetypes",
            LegacyTable::Subjects => "subjects",
        }
    }
}

/// A row type bound to the legacy table it is loaded from
pub trait LegacyRecord: DeserializeOwned + Send + 'static {
    const TABLE: LegacyTable;
}

/// Load every row of `T`'s table, in snapshot order
pub async fn load_table<T: LegacyRecord>(config: &MigrationConfig) -> MigrationResult<Vec<T>> {
    let table = T::TABLE;
    let path = config.snapshot_path(table);

    let contents = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(MigrationError::SnapshotMissing {
                table: table.name(),
                path,
            });
        }
        Err(source) => {
            return Err(MigrationError::SnapshotRead {
                table: table.name(),
                source,
            });
        }
    };

    let rows: Vec<T> =
        serde_json::from_slice(&contents).map_err(|source| MigrationError::SnapshotParse {
            table: table.name(),
            source,
        })?;

    debug!(table = table.name(), rows = rows.len(), "Snapshot loaded");
    Ok(rows)
}
