//! Record transformers
//!
//! One function per target entity turning a legacy row (plus lookups) into a
//! canonical record. Text passes through unchanged; repair happens when the
//! record is emitted.

use crate::config::FallbackPolicy;
use crate::error::MigrationResult;
use crate::legacy::{
    LegacyAccount, LegacyComment, LegacyFavouritedNote, LegacyNote, LegacyNoteCreator,
    LegacyNoteRating, LegacyNoteSubjectJunction, LegacyNotification, LegacyNotificationThread,
    LegacyReadStatus, LegacyReport, LegacyUploadTimeout, LegacyUserSubject,
};
use crate::lookup::IdLookup;
use crate::normalize::{
    normalize_completion_status, normalize_read_status, normalize_subject, normalize_term,
    normalize_thread_type, normalize_year,
};
use crate::records::{
    Account, Comment, FavoritedNote, LastUploadTime, Message, Note, NoteCreator, NoteRating,
    NoteSubjectJunction, ReadStatus, Report, Thread, UserSubject,
};
use peerview_common::enums::NoteType;
use peerview_common::CivilZone;

/// Values every transformer may need
#[derive(Debug, Clone, Copy)]
pub struct TransformContext {
    pub zone: CivilZone,
    pub fallbacks: FallbackPolicy,
}

/// Legacy `jcLevel`, with the literal "NULL" meaning no level
fn legacy_level(raw: &str) -> Option<&str> {
    match raw {
        "NULL" => None,
        level => Some(level),
    }
}

pub fn account(row: &LegacyAccount) -> Account {
    Account {
        id: row.id,
        email: row.email.clone(),
        username: row.username.clone(),
        tag: row.tag.clone().unwrap_or_default(),
        points: row.points,
        pfp_link: row.file_name.clone().unwrap_or_default(),
        notes_visited: row.notesvisited,
    }
}

pub fn note(
    row: &LegacyNote,
    note_types: &IdLookup<NoteType>,
    ctx: &TransformContext,
) -> MigrationResult<Note> {
    Ok(Note {
        id: row.id,
        title: row.title.clone(),
        description: row.description.clone().unwrap_or_default(),
        note_type: *note_types.get(row.type_id)?,
        link: row.link.clone(),
        topics: row.topics.clone().unwrap_or_default(),
        year: normalize_year(&row.level, &ctx.fallbacks),
        term: normalize_term(&row.term, &ctx.fallbacks),
        is_file: row.file_link == "F",
        status: normalize_completion_status(&row.status, &ctx.fallbacks),
        creation_time: ctx.zone.from_legacy_datetime(&row.date)?,
        visits: row.visits,
    })
}

pub fn user_subject(
    row: &LegacyUserSubject,
    subjects: &IdLookup<String>,
) -> MigrationResult<UserSubject> {
    let name = subjects.get(row.subject_id)?;
    Ok(UserSubject {
        user_id: row.user_id,
        subject: normalize_subject(name, legacy_level(&row.jc_level), false),
        is_strong: row.strong_weak == 1,
    })
}

pub fn note_subject(
    row: &LegacyNoteSubjectJunction,
    subjects: &IdLookup<String>,
) -> MigrationResult<NoteSubjectJunction> {
    let name = subjects.get(row.subject_id)?;
    Ok(NoteSubjectJunction {
        note_id: row.note_id,
        subject: normalize_subject(name, legacy_level(&row.jc_level), false),
    })
}

/// Comments have no legacy key; ids are positions in the legacy table from 1
pub fn comments(rows: &[LegacyComment], ctx: &TransformContext) -> MigrationResult<Vec<Comment>> {
    rows.iter()
        .zip(1..)
        .map(|(row, id)| -> MigrationResult<Comment> {
            Ok(Comment {
                id,
                note_id: row.noteid,
                user_id: row.userid,
                comment: row.comment.clone(),
                time: ctx.zone.from_unix(row.time)?,
            })
        })
        .collect()
}

pub fn favorited_note(row: &LegacyFavouritedNote) -> FavoritedNote {
    FavoritedNote {
        note_id: row.note_id,
        user_id: row.user_id,
        time_favourited: row.date_favourited.clone(),
    }
}

pub fn read_status(row: &LegacyReadStatus, ctx: &TransformContext) -> ReadStatus {
    ReadStatus {
        user_id: row.user_id,
        note_id: row.note_id,
        status: normalize_read_status(row.read_status, &ctx.fallbacks),
    }
}

pub fn note_creator(row: &LegacyNoteCreator) -> NoteCreator {
    NoteCreator {
        user_id: row.user_id,
        note_id: row.note_id,
    }
}

pub fn note_rating(row: &LegacyNoteRating) -> NoteRating {
    NoteRating {
        user_id: row.userid,
        note_id: row.noteid,
        rating: row.rating,
    }
}

pub fn report(row: &LegacyReport, ctx: &TransformContext) -> MigrationResult<Report> {
    Ok(Report {
        id: row.report_id,
        user_id: row.user_id,
        note_id: row.note_id,
        title: row.reason.clone(),
        description: row.details.clone(),
        time: ctx.zone.from_unix(row.time)?,
    })
}

pub fn thread(row: &LegacyNotificationThread, ctx: &TransformContext) -> Thread {
    Thread {
        id: row.threadid,
        note_id: row.noteid,
        title: row.title.clone(),
        thread_type: normalize_thread_type(row.thread_type, &ctx.fallbacks),
    }
}

pub fn message(row: &LegacyNotification, ctx: &TransformContext) -> MigrationResult<Message> {
    Ok(Message {
        id: row.notifid,
        thread_id: row.threadid,
        sender_id: row.sendid,
        receiver_id: row.recvid,
        message: row.message.clone(),
        read: row.status == 1,
        date: ctx.zone.from_legacy_datetime(&row.date)?,
    })
}

pub fn last_upload_time(
    row: &LegacyUploadTimeout,
    ctx: &TransformContext,
) -> MigrationResult<LastUploadTime> {
    Ok(LastUploadTime {
        user_id: row.userid,
        time: ctx.zone.from_unix(row.lastupload)?,
    })
}
