//! Entity pipelines
//!
//! One pipeline per target entity: load the snapshots it needs, build its
//! own lookups, transform (and reconcile), then emit. Pipelines share
//! nothing but the read-only configuration.

use crate::canvas::canvas_pixel;
use crate::config::MigrationConfig;
use crate::emit::{emit, TabularRecord};
use crate::entity::TargetEntity;
use crate::error::MigrationResult;
use crate::legacy::{
    LegacyAccount, LegacyCanvasPixel, LegacyComment, LegacyFavouritedNote, LegacyNote,
    LegacyNoteCreator, LegacyNoteRating, LegacyNoteSubjectJunction, LegacyNoteType,
    LegacyNotification, LegacyNotificationThread, LegacyReadStatus, LegacyReport, LegacySubject,
    LegacyUploadTimeout, LegacyUserSubject,
};
use crate::loader::load_table;
use crate::lookup::{note_type_lookup, subject_name_lookup, UsernameIndex};
use crate::reconcile::reconcile;
use crate::transform::{self, TransformContext};
use serde::Serialize;

/// What a finished pipeline produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineOutput {
    /// Records written, summed over artifacts
    pub rows: usize,
    pub artifacts: Vec<String>,
}

/// Write one artifact for a single-artifact entity
async fn emit_only<R: TabularRecord>(
    config: &MigrationConfig,
    entity: TargetEntity,
    records: &[R],
) -> MigrationResult<PipelineOutput> {
    debug_assert_eq!(entity.artifacts().len(), 1);
    let mut output = PipelineOutput {
        rows: 0,
        artifacts: Vec::new(),
    };
    for name in entity.artifacts() {
        output.rows += emit(records, &config.artifact_path(name)).await?;
        output.artifacts.push(name.to_string());
    }
    Ok(output)
}

/// Run the pipeline for `entity` to completion
pub async fn run_pipeline(
    entity: TargetEntity,
    config: &MigrationConfig,
    ctx: &TransformContext,
) -> MigrationResult<PipelineOutput> {
    match entity {
        TargetEntity::Users => {
            let rows: Vec<LegacyAccount> = load_table(config).await?;
            let records: Vec<_> = rows.iter().map(transform::account).collect();
            emit_only(config, entity, &records).await
        }
        TargetEntity::Notes => {
            let note_types: Vec<LegacyNoteType> = load_table(config).await?;
            let note_types = note_type_lookup(&note_types, &ctx.fallbacks);
            let rows: Vec<LegacyNote> = load_table(config).await?;
            let records = rows
                .iter()
                .map(|row| transform::note(row, &note_types, ctx))
                .collect::<MigrationResult<Vec<_>>>()?;
            emit_only(config, entity, &records).await
        }
        TargetEntity::UsersSubjects => {
            let subjects: Vec<LegacySubject> = load_table(config).await?;
            let subjects = subject_name_lookup(&subjects);
            let rows: Vec<LegacyUserSubject> = load_table(config).await?;
            let records = rows
                .iter()
                .map(|row| transform::user_subject(row, &subjects))
                .collect::<MigrationResult<Vec<_>>>()?;
            emit_only(config, entity, &records).await
        }
        TargetEntity::NotesSubjects => {
            let subjects: Vec<LegacySubject> = load_table(config).await?;
            let subjects = subject_name_lookup(&subjects);
            let rows: Vec<LegacyNoteSubjectJunction> = load_table(config).await?;
            let records = rows
                .iter()
                .map(|row| transform::note_subject(row, &subjects))
                .collect::<MigrationResult<Vec<_>>>()?;
            emit_only(config, entity, &records).await
        }
        TargetEntity::Comments => {
            let rows: Vec<LegacyComment> = load_table(config).await?;
            let records = transform::comments(&rows, ctx)?;
            emit_only(config, entity, &records).await
        }
        TargetEntity::NotesCreators => {
            let rows: Vec<LegacyNoteCreator> = load_table(config).await?;
            let records: Vec<_> = rows.iter().map(transform::note_creator).collect();
            emit_only(config, entity, &records).await
        }
        TargetEntity::NotesRatings => {
            let rows: Vec<LegacyNoteRating> = load_table(config).await?;
            let records: Vec<_> = rows.iter().map(transform::note_rating).collect();
            emit_only(config, entity, &records).await
        }
        TargetEntity::CanvasPixels => {
            let accounts: Vec<LegacyAccount> = load_table(config).await?;
            let users = UsernameIndex::new(&accounts);
            let rows: Vec<LegacyCanvasPixel> = load_table(config).await?;
            let records = rows
                .iter()
                .map(|row| canvas_pixel(row, &users))
                .collect::<MigrationResult<Vec<_>>>()?;
            emit_only(config, entity, &records).await
        }
        TargetEntity::ReadingLists => run_reading_lists(config, ctx).await,
        TargetEntity::Reports => {
            let rows: Vec<LegacyReport> = load_table(config).await?;
            let records = rows
                .iter()
                .map(|row| transform::report(row, ctx))
                .collect::<MigrationResult<Vec<_>>>()?;
            emit_only(config, entity, &records).await
        }
        TargetEntity::LastUploadTimes => {
            let rows: Vec<LegacyUploadTimeout> = load_table(config).await?;
            let records = rows
                .iter()
                .map(|row| transform::last_upload_time(row, ctx))
                .collect::<MigrationResult<Vec<_>>>()?;
            emit_only(config, entity, &records).await
        }
        TargetEntity::Threads => {
            let rows: Vec<LegacyNotificationThread> = load_table(config).await?;
            let records: Vec<_> = rows.iter().map(|row| transform::thread(row, ctx)).collect();
            emit_only(config, entity, &records).await
        }
        TargetEntity::Messages => {
            let rows: Vec<LegacyNotification> = load_table(config).await?;
            let records = rows
                .iter()
                .map(|row| transform::message(row, ctx))
                .collect::<MigrationResult<Vec<_>>>()?;
            emit_only(config, entity, &records).await
        }
    }
}

/// Reading lists and note-list entries come out of one reconciliation
async fn run_reading_lists(
    config: &MigrationConfig,
    ctx: &TransformContext,
) -> MigrationResult<PipelineOutput> {
    let accounts: Vec<LegacyAccount> = load_table(config).await?;
    let favorites: Vec<LegacyFavouritedNote> = load_table(config).await?;
    let read_statuses: Vec<LegacyReadStatus> = load_table(config).await?;

    let account_ids: Vec<i64> = accounts.iter().map(|a| a.id).collect();
    let favorites: Vec<_> = favorites.iter().map(transform::favorited_note).collect();
    let read_statuses: Vec<_> = read_statuses
        .iter()
        .map(|row| transform::read_status(row, ctx))
        .collect();

    let reconciled = reconcile(&account_ids, &favorites, &read_statuses);

    let [lists_artifact, entries_artifact] = ["reading_lists.csv", "notes_lists.csv"];
    let mut rows = emit(
        &reconciled.reading_lists,
        &config.artifact_path(lists_artifact),
    )
    .await?;
    rows += emit(&reconciled.entries, &config.artifact_path(entries_artifact)).await?;

    Ok(PipelineOutput {
        rows,
        artifacts: vec![lists_artifact.to_string(), entries_artifact.to_string()],
    })
}
