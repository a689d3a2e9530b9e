//! Canonical records
//!
//! Value objects of the normalized schema. Each emitted record declares its
//! columns through `TabularRecord`; field order there is the artifact's
//! column order.

use crate::emit::{Cell, TabularRecord};
use peerview_common::enums::{
    NoteCompletionStatus, NoteReadStatus, NoteType, ReadingListType, Subject, Term, ThreadType,
    Year,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub tag: String,
    pub points: i64,
    pub pfp_link: String,
    pub notes_visited: i64,
}

impl TabularRecord for Account {
    const ENTITY: &'static str = "users";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "email",
        "username",
        "tag",
        "points",
        "pfpLink",
        "notesVisited",
    ];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Int(self.id),
            Cell::Text(&self.email),
            Cell::Text(&self.username),
            Cell::Text(&self.tag),
            Cell::Int(self.points),
            Cell::Text(&self.pfp_link),
            Cell::Int(self.notes_visited),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub note_type: NoteType,
    pub link: String,
    pub topics: String,
    pub year: Year,
    pub term: Term,
    pub is_file: bool,
    pub status: NoteCompletionStatus,
    pub creation_time: String,
    pub visits: i64,
}

impl TabularRecord for Note {
    const ENTITY: &'static str = "notes";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "title",
        "description",
        "type",
        "link",
        "topics",
        "year",
        "term",
        "isFile",
        "status",
        "creationTime",
        "visits",
    ];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Int(self.id),
            Cell::Text(&self.title),
            Cell::Text(&self.description),
            Cell::Name(self.note_type.as_str()),
            Cell::Text(&self.link),
            Cell::Text(&self.topics),
            Cell::Int(self.year.code()),
            Cell::Int(self.term.code()),
            Cell::Bool(self.is_file),
            Cell::Int(self.status.code()),
            Cell::Text(&self.creation_time),
            Cell::Int(self.visits),
        ]
    }
}

/// A user's strong or weak subject
#[derive(Debug, Clone, PartialEq)]
pub struct UserSubject {
    pub user_id: i64,
    pub subject: Subject,
    pub is_strong: bool,
}

impl TabularRecord for UserSubject {
    const ENTITY: &'static str = "users_subjects";
    const FIELDS: &'static [&'static str] = &["userId", "subject", "isStrong"];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Int(self.user_id),
            Cell::Name(self.subject.as_str()),
            Cell::Bool(self.is_strong),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoteSubjectJunction {
    pub note_id: i64,
    pub subject: Subject,
}

impl TabularRecord for NoteSubjectJunction {
    const ENTITY: &'static str = "notes_subjects";
    const FIELDS: &'static [&'static str] = &["noteId", "subject"];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![Cell::Int(self.note_id), Cell::Name(self.subject.as_str())]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    /// Position in the legacy table, from 1
    pub id: i64,
    pub note_id: i64,
    pub user_id: i64,
    pub comment: String,
    pub time: String,
}

impl TabularRecord for Comment {
    const ENTITY: &'static str = "comments";
    const FIELDS: &'static [&'static str] = &["id", "noteId", "userId", "comment", "time"];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Int(self.id),
            Cell::Int(self.note_id),
            Cell::Int(self.user_id),
            Cell::Text(&self.comment),
            Cell::Text(&self.time),
        ]
    }
}

/// Transitional: consumed by the reading list reconciler, never emitted
#[derive(Debug, Clone, PartialEq)]
pub struct FavoritedNote {
    pub note_id: i64,
    pub user_id: i64,
    /// Carried as in the legacy table
    pub time_favourited: String,
}

/// Transitional: consumed by the reading list reconciler, never emitted
#[derive(Debug, Clone, PartialEq)]
pub struct ReadStatus {
    pub user_id: i64,
    pub note_id: i64,
    pub status: NoteReadStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoteCreator {
    pub user_id: i64,
    pub note_id: i64,
}

impl TabularRecord for NoteCreator {
    const ENTITY: &'static str = "notes_creators";
    const FIELDS: &'static [&'static str] = &["userId", "noteId"];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![Cell::Int(self.user_id), Cell::Int(self.note_id)]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoteRating {
    pub user_id: i64,
    pub note_id: i64,
    pub rating: f64,
}

impl TabularRecord for NoteRating {
    const ENTITY: &'static str = "notes_ratings";
    const FIELDS: &'static [&'static str] = &["userId", "noteId", "rating"];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Int(self.user_id),
            Cell::Int(self.note_id),
            Cell::Float(self.rating),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CanvasPixel {
    pub x: i64,
    pub y: i64,
    pub user_id: i64,
    /// `#rrggbb`
    pub color: String,
}

impl TabularRecord for CanvasPixel {
    const ENTITY: &'static str = "canvas_pixels";
    const FIELDS: &'static [&'static str] = &["x", "y", "userId", "color"];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Int(self.x),
            Cell::Int(self.y),
            Cell::Int(self.user_id),
            Cell::Text(&self.color),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadingList {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub list_type: ReadingListType,
}

impl TabularRecord for ReadingList {
    const ENTITY: &'static str = "reading_lists";
    const FIELDS: &'static [&'static str] = &["id", "userId", "name", "listType"];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Int(self.id),
            Cell::Int(self.user_id),
            Cell::Text(&self.name),
            Cell::Int(self.list_type.code()),
        ]
    }
}

/// Membership of one note in one reading list
#[derive(Debug, Clone, PartialEq)]
pub struct NoteListEntry {
    pub id: i64,
    pub note_id: i64,
    pub list_id: i64,
}

impl TabularRecord for NoteListEntry {
    const ENTITY: &'static str = "notes_lists";
    const FIELDS: &'static [&'static str] = &["id", "noteId", "listId"];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Int(self.id),
            Cell::Int(self.note_id),
            Cell::Int(self.list_id),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: i64,
    pub user_id: i64,
    pub note_id: i64,
    pub title: String,
    pub description: String,
    pub time: String,
}

impl TabularRecord for Report {
    const ENTITY: &'static str = "reports";
    const FIELDS: &'static [&'static str] =
        &["id", "userId", "noteId", "title", "description", "time"];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Int(self.id),
            Cell::Int(self.user_id),
            Cell::Int(self.note_id),
            Cell::Text(&self.title),
            Cell::Text(&self.description),
            Cell::Text(&self.time),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Thread {
    pub id: i64,
    pub note_id: i64,
    pub title: String,
    pub thread_type: ThreadType,
}

impl TabularRecord for Thread {
    const ENTITY: &'static str = "threads";
    const FIELDS: &'static [&'static str] = &["id", "noteId", "title", "type"];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Int(self.id),
            Cell::Int(self.note_id),
            Cell::Text(&self.title),
            Cell::Name(self.thread_type.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i64,
    pub thread_id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub message: String,
    pub read: bool,
    pub date: String,
}

impl TabularRecord for Message {
    const ENTITY: &'static str = "messages";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "threadId",
        "senderId",
        "receiverId",
        "message",
        "read",
        "date",
    ];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Int(self.id),
            Cell::Int(self.thread_id),
            Cell::Int(self.sender_id),
            Cell::Int(self.receiver_id),
            Cell::Text(&self.message),
            Cell::Bool(self.read),
            Cell::Text(&self.date),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LastUploadTime {
    pub user_id: i64,
    pub time: String,
}

impl TabularRecord for LastUploadTime {
    const ENTITY: &'static str = "last_upload_times";
    const FIELDS: &'static [&'static str] = &["userId", "time"];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![Cell::Int(self.user_id), Cell::Text(&self.time)]
    }
}
