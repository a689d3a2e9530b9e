//! In-memory lookups over small legacy tables
//!
//! Built once per pipeline and read-only afterwards. A missing id is a broken
//! foreign key and fails the record that needed it.

use crate::config::FallbackPolicy;
use crate::error::{MigrationError, MigrationResult};
use crate::legacy::{LegacyAccount, LegacyNoteType, LegacySubject};
use crate::normalize::normalize_note_type;
use peerview_common::enums::NoteType;
use std::collections::HashMap;
use tracing::debug;

/// Legacy numeric id to resolved value
#[derive(Debug, Clone)]
pub struct IdLookup<V> {
    table: &'static str,
    entries: HashMap<i64, V>,
}

impl<V> IdLookup<V> {
    /// Build from `(id, value)` pairs; a repeated id keeps its first value
    pub fn new(table: &'static str, pairs: impl IntoIterator<Item = (i64, V)>) -> Self {
        let mut entries = HashMap::new();
        for (id, value) in pairs {
            entries.entry(id).or_insert(value);
        }
        debug!(table, entries = entries.len(), "Lookup built");
        Self { table, entries }
    }

    pub fn get(&self, id: i64) -> MigrationResult<&V> {
        self.entries.get(&id).ok_or(MigrationError::MissingLookup {
            table: self.table,
            id,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `notetypes.typeID` to canonical note type
pub fn note_type_lookup(rows: &[LegacyNoteType], fallbacks: &FallbackPolicy) -> IdLookup<NoteType> {
    IdLookup::new(
        "notetypes",
        rows.iter()
            .map(|row| (row.type_id, normalize_note_type(&row.type_name, fallbacks))),
    )
}

/// `subjects.subjectID` to legacy subject display name
pub fn subject_name_lookup(rows: &[LegacySubject]) -> IdLookup<String> {
    IdLookup::new(
        "subjects",
        rows.iter().map(|row| (row.subject_id, row.subject_name.clone())),
    )
}

/// Username to account id; the first account holding a username wins
#[derive(Debug, Clone)]
pub struct UsernameIndex {
    ids: HashMap<String, i64>,
}

impl UsernameIndex {
    pub fn new(accounts: &[LegacyAccount]) -> Self {
        let mut ids = HashMap::with_capacity(accounts.len());
        for account in accounts {
            if ids.contains_key(&account.username) {
                debug!(username = %account.username, id = account.id, "Duplicate username ignored");
                continue;
            }
            ids.insert(account.username.clone(), account.id);
        }
        debug!(entries = ids.len(), "Username index built");
        Self { ids }
    }

    pub fn resolve(&self, username: &str) -> MigrationResult<i64> {
        self.ids
            .get(username)
            .copied()
            .ok_or_else(|| MigrationError::UnknownUsername(username.to_string()))
    }
}
