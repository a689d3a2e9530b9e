//! Migration orchestrator
//!
//! Checks that every needed snapshot exists, starts one task per selected
//! entity, and joins all of them before reporting. A failed or panicked
//! pipeline fails only its own entity.

use crate::config::MigrationConfig;
use crate::emit::write_artifact;
use crate::entity::TargetEntity;
use crate::error::{MigrationError, MigrationResult};
use crate::loader::LegacyTable;
use crate::pipeline::{run_pipeline, PipelineOutput};
use crate::transform::TransformContext;
use serde::Serialize;
use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::{self, JoinSet};
use tracing::{error, info};

/// File name of the consolidated report, next to the artifacts
pub const REPORT_FILE_NAME: &str = "migration_report.json";

/// Outcome of one entity pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntityOutcome {
    Succeeded { rows: usize, artifacts: Vec<String> },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityReport {
    pub entity: TargetEntity,
    #[serde(flatten)]
    pub outcome: EntityOutcome,
}

/// Consolidated result of a run, in fixed entity order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    pub entities: Vec<EntityReport>,
}

impl MigrationReport {
    /// True only when every entity succeeded
    pub fn is_success(&self) -> bool {
        self.entities
            .iter()
            .all(|e| matches!(e.outcome, EntityOutcome::Succeeded { .. }))
    }

    pub fn failures(&self) -> impl Iterator<Item = &EntityReport> {
        self.entities
            .iter()
            .filter(|e| matches!(e.outcome, EntityOutcome::Failed { .. }))
    }

    pub fn outcome(&self, entity: TargetEntity) -> Option<&EntityOutcome> {
        self.entities
            .iter()
            .find(|e| e.entity == entity)
            .map(|e| &e.outcome)
    }
}

/// Fail fast when any snapshot needed by `entities` is missing
pub async fn preflight(config: &MigrationConfig, entities: &[TargetEntity]) -> MigrationResult<()> {
    let mut checked: Vec<LegacyTable> = Vec::new();
    for table in entities.iter().flat_map(|e| e.required_tables().iter().copied()) {
        if checked.contains(&table) {
            continue;
        }
        checked.push(table);

        let path = config.snapshot_path(table);
        if tokio::fs::metadata(&path).await.is_err() {
            return Err(MigrationError::SnapshotMissing {
                table: table.name(),
                path,
            });
        }
    }
    Ok(())
}

/// Run every selected entity pipeline and collect their outcomes
///
/// Returns an error only for problems that stop the run before any
/// pipeline starts: an unusable time zone, a missing snapshot, an output
/// directory that cannot be created.
pub async fn run_migration(config: Arc<MigrationConfig>) -> MigrationResult<MigrationReport> {
    let ctx = TransformContext {
        zone: config.timezone.zone()?,
        fallbacks: config.fallbacks,
    };
    let entities = config.selected_entities();

    preflight(&config, &entities).await?;
    tokio::fs::create_dir_all(&config.output_dir).await?;

    info!(
        entities = entities.len(),
        input = %config.input_dir.display(),
        output = %config.output_dir.display(),
        "Starting migration"
    );

    let results = run_concurrently(&entities, |entity| {
        let config = Arc::clone(&config);
        async move {
            info!(entity = entity.name(), "Pipeline started");
            run_pipeline(entity, &config, &ctx).await
        }
    })
    .await;

    let mut report = MigrationReport::default();
    for (entity, result) in entities.into_iter().zip(results) {
        let outcome = match result {
            Ok(output) => {
                info!(
                    entity = entity.name(),
                    rows = output.rows,
                    artifacts = ?output.artifacts,
                    "Pipeline finished"
                );
                EntityOutcome::Succeeded {
                    rows: output.rows,
                    artifacts: output.artifacts,
                }
            }
            Err(e) => {
                error!(entity = entity.name(), error = %e, "Pipeline failed");
                EntityOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };
        report.entities.push(EntityReport { entity, outcome });
    }

    Ok(report)
}

/// Run one task per entity and return their results in `entities` order
///
/// A task that panics yields `TaskPanicked` for its own entity; results are
/// matched back to entities by task id, not by completion order.
pub async fn run_concurrently<F, Fut>(
    entities: &[TargetEntity],
    run: F,
) -> Vec<MigrationResult<PipelineOutput>>
where
    F: Fn(TargetEntity) -> Fut,
    Fut: Future<Output = MigrationResult<PipelineOutput>> + Send + 'static,
{
    let mut tasks = JoinSet::new();
    let mut slots: HashMap<task::Id, usize> = HashMap::with_capacity(entities.len());
    for (index, &entity) in entities.iter().enumerate() {
        let handle = tasks.spawn(run(entity));
        slots.insert(handle.id(), index);
    }

    let mut outcomes: Vec<Option<MigrationResult<PipelineOutput>>> =
        entities.iter().map(|_| None).collect();
    while let Some(joined) = tasks.join_next_with_id().await {
        let (id, result) = match joined {
            Ok((id, result)) => (id, result),
            Err(e) => (e.id(), Err(MigrationError::TaskPanicked(e.to_string()))),
        };
        if let Some(&index) = slots.get(&id) {
            outcomes[index] = Some(result);
        }
    }

    outcomes
        .into_iter()
        .map(|outcome| {
            outcome.unwrap_or_else(|| {
                Err(MigrationError::TaskPanicked("task ended without a result".to_string()))
            })
        })
        .collect()
}

/// Write the report as pretty JSON, returning its path
pub async fn write_report(config: &MigrationConfig, report: &MigrationReport) -> MigrationResult<PathBuf> {
    let path = config.artifact_path(REPORT_FILE_NAME);
    let mut contents = serde_json::to_vec_pretty(report).map_err(std::io::Error::from)?;
    contents.push(b'\n');
    write_artifact(&path, &contents).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_report_json_shape() {
        let report = MigrationReport {
            entities: vec![
                EntityReport {
                    entity: TargetEntity::Users,
                    outcome: EntityOutcome::Succeeded {
                        rows: 2,
                        artifacts: vec!["users.csv".to_string()],
                    },
                },
                EntityReport {
                    entity: TargetEntity::CanvasPixels,
                    outcome: EntityOutcome::Failed {
                        reason: "No user with username: bob".to_string(),
                    },
                },
            ],
        };

        assert!(!report.is_success());
        assert_eq!(report.failures().count(), 1);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "entities": [
                    {"entity": "users", "status": "succeeded", "rows": 2, "artifacts": ["users.csv"]},
                    {"entity": "canvas_pixels", "status": "failed", "reason": "No user with username: bob"}
                ]
            })
        );
    }

    #[test]
    fn test_empty_report_is_success() {
        assert!(MigrationReport::default().is_success());
    }

    #[tokio::test]
    async fn test_panics_are_attributed_to_their_own_entity() {
        let entities = [
            TargetEntity::Users,
            TargetEntity::Notes,
            TargetEntity::Comments,
            TargetEntity::Threads,
        ];

        // Later entities finish first so completion order is the reverse of entity order
        let results = run_concurrently(&entities, |entity| async move {
            let delay = match entity {
                TargetEntity::Users => 60,
                TargetEntity::Notes => 40,
                TargetEntity::Comments => 20,
                _ => 0,
            };
            tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
            let output: MigrationResult<PipelineOutput> = match entity {
                TargetEntity::Notes | TargetEntity::Threads => {
                    panic!("boom in {}", entity.name())
                }
                _ => Ok(PipelineOutput {
                    rows: 1,
                    artifacts: vec![entity.artifacts()[0].to_string()],
                }),
            };
            output
        })
        .await;

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().unwrap().artifacts, vec!["users.csv".to_string()]);
        assert_eq!(results[2].as_ref().unwrap().artifacts, vec!["comments.csv".to_string()]);
        match &results[1] {
            Err(MigrationError::TaskPanicked(reason)) => assert!(reason.contains("boom in notes"), "{}", reason),
            other => panic!("unexpected notes result: {:?}", other),
        }
        match &results[3] {
            Err(MigrationError::TaskPanicked(reason)) => assert!(reason.contains("boom in threads"), "{}", reason),
            other => panic!("unexpected threads result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_preflight_names_first_missing_table() {
        let dir = TempDir::new().unwrap();
        let config = MigrationConfig {
            input_dir: dir.path().to_path_buf(),
            snapshot_prefix: String::new(),
            ..Default::default()
        };
        std::fs::write(dir.path().join("placecanvas.json"), "[]").unwrap();

        let err = preflight(&config, &[TargetEntity::CanvasPixels]).await.unwrap_err();
        assert!(matches!(err, MigrationError::SnapshotMissing { table: "accounts", .. }));

        std::fs::write(dir.path().join("accounts.json"), "[]").unwrap();
        preflight(&config, &[TargetEntity::CanvasPixels]).await.unwrap();
    }
}
