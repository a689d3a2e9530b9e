//! Legacy table records
//!
//! One struct per legacy table, declaring every column of the export,
//! deprecated ones included. Deserialization is by field name with
//! `deny_unknown_fields`; nullable columns must still be present, so a
//! snapshot whose shape drifted is rejected instead of being misread.
//!
//! Comments on fields record the value domain observed in the export.

use crate::loader::{LegacyRecord, LegacyTable};
use serde::{Deserialize, Deserializer};

/// Deserialize a column that may be `null` but must be present
///
/// Plain `Option<T>` fields default to `None` when absent; routing through
/// `deserialize_with` makes absence a "missing field" error.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

/// Integer column that some dumps wrote as a numeric string
fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Str(String),
    }

    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(v) => Ok(v),
        IntOrString::Str(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("expected integer, found {:?}", s))),
    }
}

/// Table `accounts`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacyAccount {
    #[serde(deserialize_with = "lenient_int")]
    pub id: i64,
    pub email: String,
    /// May contain mis-decoded text
    pub username: String,
    /// Deprecated: lowercase hex
    pub pfpcolor: String,
    /// Deprecated: hex, mixed case
    pub pfptextcolor: String,
    /// Deprecated: '@#'-separated list or null
    #[serde(deserialize_with = "nullable")]
    pub badsubjects: Option<String>,
    /// Deprecated: like `badsubjects`, may also be the literal "NULL"
    #[serde(deserialize_with = "nullable")]
    pub goodsubjects: Option<String>,
    /// Deprecated: free-form year ("Year 1", "Y4", "JC 1", "Other", ...)
    #[serde(deserialize_with = "nullable")]
    pub year: Option<String>,
    /// Deprecated
    #[serde(deserialize_with = "nullable")]
    pub school: Option<String>,
    /// Deprecated: unstructured class name
    #[serde(rename = "class", deserialize_with = "nullable")]
    pub class_name: Option<String>,
    /// null, "Owner", "Supporter" or "Beta"
    #[serde(deserialize_with = "nullable")]
    pub tag: Option<String>,
    /// Deprecated
    pub notesno: i64,
    /// Deprecated
    pub avgrating: f64,
    /// Deprecated, may be negative
    pub popularity: i64,
    pub notesvisited: i64,
    /// Deprecated
    pub tries: i64,
    /// Deprecated: literal "NULL"
    pub lockeduntil: String,
    /// May be negative
    pub points: i64,
    /// Deprecated
    pub prevpointalloc: i64,
    /// Profile picture: null, a googleusercontent URL or a "pfpuploads/" path
    #[serde(deserialize_with = "nullable")]
    pub file_name: Option<String>,
}

/// Table `notes`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacyNote {
    pub id: i64,
    /// May contain mis-decoded text
    pub title: String,
    /// Website link or file path, see `file_link`
    pub link: String,
    #[serde(deserialize_with = "nullable")]
    pub description: Option<String>,
    /// Deprecated: comma-separated subject names, "others" or "NULL"
    pub subject: String,
    /// "Term 1" to "Term 4"
    pub term: String,
    /// Deprecated: superseded by `typeID`
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub type_name: Option<String>,
    /// Key into table `notetypes`
    #[serde(rename = "typeID")]
    pub type_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub topics: Option<String>,
    /// Deprecated: comma-separated usernames, superseded by `notecreators`
    #[serde(deserialize_with = "nullable")]
    pub creator: Option<String>,
    /// "Planned", "Ongoing" or "Completed"
    pub status: String,
    /// Deprecated
    pub email: String,
    /// YYYY-mm-dd
    pub date: String,
    /// "Year 1".."Year 4", "JC 1" or "JC 2"
    pub level: String,
    /// May be negative
    pub visits: i64,
    /// Deprecated
    pub total_rating: f64,
    /// Deprecated
    pub people_rated: i64,
    /// Deprecated: '@#!%!@@%@#!%!@%@'-separated blob
    #[serde(deserialize_with = "nullable")]
    pub comments: Option<String>,
    /// Deprecated
    pub multiplier: f64,
    /// Deprecated: null, "null", "undefined" or a link
    #[serde(deserialize_with = "nullable")]
    pub image: Option<String>,
    /// "F" for an uploaded file, "L" for a link
    pub file_link: String,
}

/// Table `subjects`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacySubject {
    #[serde(rename = "subjectID")]
    pub subject_id: i64,
    #[serde(rename = "subjectName")]
    pub subject_name: String,
}

/// Table `notetypes`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacyNoteType {
    #[serde(rename = "typeID")]
    pub type_id: i64,
    #[serde(rename = "type")]
    pub type_name: String,
}

/// Table `usersubjects`: strong and weak subjects of each user
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacyUserSubject {
    #[serde(rename = "userID")]
    pub user_id: i64,
    #[serde(rename = "subjectID")]
    pub subject_id: i64,
    /// "H1", "H2", "H3" or the literal "NULL"
    #[serde(rename = "jcLevel")]
    pub jc_level: String,
    /// 1 = strong, 0 = weak
    #[serde(rename = "StrongWeak")]
    pub strong_weak: i64,
}

/// Table `notesubjectjunction`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacyNoteSubjectJunction {
    #[serde(rename = "noteID")]
    pub note_id: i64,
    /// "H1", "H2", "H3" or the literal "NULL"
    #[serde(rename = "jcLevel")]
    pub jc_level: String,
    #[serde(rename = "subjectID")]
    pub subject_id: i64,
}

/// Table `comments`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacyComment {
    pub noteid: i64,
    /// May contain mis-decoded text or markup
    pub comment: String,
    /// 0 for comments by a since-invalid user
    pub userid: i64,
    /// UNIX seconds
    pub time: i64,
}

/// Table `favouritednotes`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacyFavouritedNote {
    #[serde(rename = "noteID")]
    pub note_id: i64,
    #[serde(rename = "userID")]
    pub user_id: i64,
    /// YYYY-mm-dd HH:MM:SS
    #[serde(rename = "dateFavourited")]
    pub date_favourited: String,
}

/// Table `readstatus`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacyReadStatus {
    #[serde(rename = "userID")]
    pub user_id: i64,
    #[serde(rename = "noteID")]
    pub note_id: i64,
    /// 0 unread, 1 reading, 2 read
    #[serde(rename = "readStatus")]
    pub read_status: i64,
}

/// Table `notecreators`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacyNoteCreator {
    #[serde(rename = "userID")]
    pub user_id: i64,
    #[serde(rename = "noteID")]
    pub note_id: i64,
}

/// Table `noteratings`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacyNoteRating {
    pub noteid: i64,
    pub userid: i64,
    /// Multiple of 0.5 in 0.5..=5.0
    pub rating: f64,
    /// YYYY-mm-dd HH:MM:SS
    #[serde(rename = "dateRated")]
    pub date_rated: String,
}

/// Table `placecanvas`: keyed by username, not user id
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacyCanvasPixel {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "X")]
    pub x: i64,
    #[serde(rename = "Y")]
    pub y: i64,
    /// YYYY-mm-dd HH:MM:SS
    #[serde(rename = "Time")]
    pub time: String,
    /// Lowercase hex or "rgb(r, g, b)"
    pub color: String,
}

/// Table `reports`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacyReport {
    #[serde(rename = "reportId")]
    pub report_id: i64,
    #[serde(rename = "noteId")]
    pub note_id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub reason: String,
    pub details: String,
    /// UNIX seconds
    pub time: i64,
}

/// Table `notification_threads`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacyNotificationThread {
    pub threadid: i64,
    pub title: String,
    /// 0 when the thread lost its note
    pub noteid: i64,
    /// 0 collaboration request, 1 comment
    #[serde(rename = "type")]
    pub thread_type: i64,
}

/// Table `notifications`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacyNotification {
    pub notifid: i64,
    pub sendid: i64,
    pub recvid: i64,
    /// Frequently mis-decoded
    pub message: String,
    /// 1 = read
    pub status: i64,
    /// YYYY-mm-dd HH:MM:SS
    pub date: String,
    pub threadid: i64,
}

/// Table `uploadtimeout`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacyUploadTimeout {
    pub userid: i64,
    /// UNIX seconds
    pub lastupload: i64,
}

impl LegacyRecord for LegacyAccount {
    const TABLE: LegacyTable = LegacyTable::Accounts;
}
impl LegacyRecord for LegacyNote {
    const TABLE: LegacyTable = LegacyTable::Notes;
}
impl LegacyRecord for LegacySubject {
    const TABLE: LegacyTable = LegacyTable::Subjects;
}
impl LegacyRecord for LegacyNoteType {
    const TABLE: LegacyTable = LegacyTable::NoteTypes;
}
impl LegacyRecord for LegacyUserSubject {
    const TABLE: LegacyTable = LegacyTable::UserSubjects;
}
impl LegacyRecord for LegacyNoteSubjectJunction {
    const TABLE: LegacyTable = LegacyTable::NoteSubjectJunction;
}
impl LegacyRecord for LegacyComment {
    const TABLE: LegacyTable = LegacyTable::Comments;
}
impl LegacyRecord for LegacyFavouritedNote {
    const TABLE: LegacyTable = LegacyTable::FavouritedNotes;
}
impl LegacyRecord for LegacyReadStatus {
    const TABLE: LegacyTable = LegacyTable::ReadStatus;
}
impl LegacyRecord for LegacyNoteCreator {
    const TABLE: LegacyTable = LegacyTable::NoteCreators;
}
impl LegacyRecord for LegacyNoteRating {
    const TABLE: LegacyTable = LegacyTable::NoteRatings;
}
impl LegacyRecord for LegacyCanvasPixel {
    const TABLE: LegacyTable = LegacyTable::PlaceCanvas;
}
impl LegacyRecord for LegacyReport {
    const TABLE: LegacyTable = LegacyTable::Reports;
}
impl LegacyRecord for LegacyNotificationThread {
    const TABLE: LegacyTable = LegacyTable::NotificationThreads;
}
impl LegacyRecord for LegacyNotification {
    const TABLE: LegacyTable = LegacyTable::Notifications;
}
impl LegacyRecord for LegacyUploadTimeout {
    const TABLE: LegacyTable = LegacyTable::UploadTimeout;
}
