//! Configuration for peerview-migrate
//!
//! A `MigrationConfig` is built once in `main` (TOML file, then command-line
//! overrides) and shared read-only with every pipeline.

use crate::entity::TargetEntity;
use crate::loader::LegacyTable;
use peerview_common::config::LoggingConfig;
use peerview_common::enums::{
    NoteCompletionStatus, NoteReadStatus, NoteType, Term, ThreadType, Year,
};
use peerview_common::{CivilZone, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default config file name under the platform config directory
pub const CONFIG_FILE_NAME: &str = "migrate.toml";

/// Complete migration configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    /// Directory holding one JSON snapshot per legacy table
    pub input_dir: PathBuf,
    /// Directory receiving one CSV artifact per target entity
    pub output_dir: PathBuf,
    /// File name prefix shared by all snapshots
    pub snapshot_prefix: String,
    pub timezone: TimeZoneConfig,
    pub fallbacks: FallbackPolicy,
    pub logging: LoggingConfig,
    /// Entities to migrate; empty means all of them
    pub entities: Vec<TargetEntity>,
    /// Write `migration_report.json` next to the artifacts
    pub write_report: bool,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("data_json"),
            output_dir: PathBuf::from("data_new"),
            snapshot_prefix: "ylrdxapi_peerview_table_".to_string(),
            timezone: TimeZoneConfig::default(),
            fallbacks: FallbackPolicy::default(),
            logging: LoggingConfig::default(),
            entities: Vec::new(),
            write_report: true,
        }
    }
}

impl MigrationConfig {
    /// Path of the snapshot file for a legacy table
    pub fn snapshot_path(&self, table: LegacyTable) -> PathBuf {
        self.input_dir
            .join(format!("{}{}.json", self.snapshot_prefix, table.name()))
    }

    /// Path of an output artifact
    pub fn artifact_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// Entities to run, deduplicated, in fixed migration order
    pub fn selected_entities(&self) -> Vec<TargetEntity> {
        TargetEntity::ALL
            .iter()
            .copied()
            .filter(|e| self.entities.is_empty() || self.entities.contains(e))
            .collect()
    }
}

/// Zone that canonical timestamps are rendered in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimeZoneConfig {
    /// IANA zone name; the offset written for each timestamp follows its rules
    pub name: String,
}

impl Default for TimeZoneConfig {
    fn default() -> Self {
        Self {
            name: "Asia/Singapore".to_string(),
        }
    }
}

impl TimeZoneConfig {
    pub fn zone(&self) -> Result<CivilZone> {
        CivilZone::from_name(&self.name)
    }
}

/// Value substituted when a legacy field holds something outside its table
///
/// Defaults reproduce the legacy behavior. Whether each default reflects
/// real data semantics is unresolved, so they are configuration rather
/// than code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackPolicy {
    pub note_type: NoteType,
    pub year: Year,
    pub term: Term,
    pub completion_status: NoteCompletionStatus,
    pub read_status: NoteReadStatus,
    pub thread_type: ThreadType,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self {
            note_type: NoteType::Others,
            year: Year::Graduated,
            term: Term::Term1,
            completion_status: NoteCompletionStatus::Completed,
            read_status: NoteReadStatus::Reading,
            thread_type: ThreadType::CollaborationRequest,
        }
    }
}
