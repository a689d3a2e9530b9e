//! peerview-migrate library
//!
//! One-shot migration of the legacy PeerView export into the normalized
//! schema. Snapshots are read from one JSON file per legacy table and every
//! target entity is written as one CSV artifact ready for bulk load.

pub mod canvas;
pub mod config;
pub mod emit;
pub mod encoding;
pub mod entity;
pub mod error;
pub mod legacy;
pub mod loader;
pub mod lookup;
pub mod normalize;
pub mod orchestrator;
pub mod pipeline;
pub mod reconcile;
pub mod records;
pub mod transform;

pub use config::{FallbackPolicy, MigrationConfig};
pub use entity::TargetEntity;
pub use error::{MigrationError, MigrationResult};
pub use orchestrator::{run_migration, write_report, EntityOutcome, MigrationReport};
