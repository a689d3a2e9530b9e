//! Target entities
//!
//! Each target entity is one independent pipeline producing one or more
//! artifacts. `ALL` fixes the order used for reports and logs.

use crate::loader::LegacyTable;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum TargetEntity {
    Users,
    Notes,
    UsersSubjects,
    NotesSubjects,
    Comments,
    NotesCreators,
    NotesRatings,
    CanvasPixels,
    /// Reading lists and their note-list entries
    ReadingLists,
    Reports,
    LastUploadTimes,
    Threads,
    Messages,
}

impl TargetEntity {
    pub const ALL: [TargetEntity; 13] = [
        TargetEntity::Users,
        TargetEntity::Notes,
        TargetEntity::UsersSubjects,
        TargetEntity::NotesSubjects,
        TargetEntity::Comments,
        TargetEntity::NotesCreators,
        TargetEntity::NotesRatings,
        TargetEntity::CanvasPixels,
        TargetEntity::ReadingLists,
        TargetEntity::Reports,
        TargetEntity::LastUploadTimes,
        TargetEntity::Threads,
        TargetEntity::Messages,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TargetEntity::Users => "users",
            TargetEntity::Notes => "notes",
            TargetEntity::UsersSubjects => "users_subjects",
            TargetEntity::NotesSubjects => "notes_subjects",
            TargetEntity::Comments => "comments",
            TargetEntity::NotesCreators => "notes_creators",
            TargetEntity::NotesRatings => "notes_ratings",
            TargetEntity::CanvasPixels => "canvas_pixels",
            TargetEntity::ReadingLists => "reading_lists",
            TargetEntity::Reports => "reports",
            TargetEntity::LastUploadTimes => "last_upload_times",
            TargetEntity::Threads => "threads",
            TargetEntity::Messages => "messages",
        }
    }

    /// Output file names, in write order
    pub fn artifacts(&self) -> &'static [&'static str] {
        match self {
            TargetEntity::Users => &["users.csv"],
            TargetEntity::Notes => &["notes.csv"],
            TargetEntity::UsersSubjects => &["users_subjects.csv"],
            TargetEntity::NotesSubjects => &["notes_subjects.csv"],
            TargetEntity::Comments => &["comments.csv"],
            TargetEntity::NotesCreators => &["notes_creators.csv"],
            TargetEntity::NotesRatings => &["notes_ratings.csv"],
            TargetEntity::CanvasPixels => &["canvas_pixels.csv"],
            TargetEntity::ReadingLists => &["reading_lists.csv", "notes_lists.csv"],
            TargetEntity::Reports => &["reports.csv"],
            TargetEntity::LastUploadTimes => &["last_upload_times.csv"],
            TargetEntity::Threads => &["threads.csv"],
            TargetEntity::Messages => &["messages.csv"],
        }
    }

    /// Legacy snapshots the pipeline reads
    pub fn required_tables(&self) -> &'static [LegacyTable] {
        match self {
            TargetEntity::Users => &[LegacyTable::Accounts],
            TargetEntity::Notes => &[LegacyTable::Notes, LegacyTable::NoteTypes],
            TargetEntity::UsersSubjects => &[LegacyTable::UserSubjects, LegacyTable::Subjects],
            TargetEntity::NotesSubjects => {
                &[LegacyTable::NoteSubjectJunction, LegacyTable::Subjects]
            }
            TargetEntity::Comments => &[LegacyTable::Comments],
            TargetEntity::NotesCreators => &[LegacyTable::NoteCreators],
            TargetEntity::NotesRatings => &[LegacyTable::NoteRatings],
            TargetEntity::CanvasPixels => &[LegacyTable::PlaceCanvas, LegacyTable::Accounts],
            TargetEntity::ReadingLists => &[
                LegacyTable::Accounts,
                LegacyTable::FavouritedNotes,
                LegacyTable::ReadStatus,
            ],
            TargetEntity::Reports => &[LegacyTable::Reports],
            TargetEntity::LastUploadTimes => &[LegacyTable::UploadTimeout],
            TargetEntity::Threads => &[LegacyTable::NotificationThreads],
            TargetEntity::Messages => &[LegacyTable::Notifications],
        }
    }
}

impl fmt::Display for TargetEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
