//! Legacy snapshot fixtures
//!
//! Row builders produce complete legacy rows (every column present, as the
//! loader requires). `SnapshotDir` writes them where a `MigrationConfig`
//! pointing at a temporary directory will find them.

use peerview_migrate::loader::LegacyTable;
use peerview_migrate::MigrationConfig;
use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;

pub const PREFIX: &str = "ylrdxapi_peerview_table_";

/// Every legacy table the migration reads
pub const ALL_TABLES: [LegacyTable; 16] = [
    LegacyTable::Accounts,
    LegacyTable::UserSubjects,
    LegacyTable::Notes,
    LegacyTable::NoteSubjectJunction,
    LegacyTable::Comments,
    LegacyTable::FavouritedNotes,
    LegacyTable::NoteCreators,
    LegacyTable::NoteRatings,
    LegacyTable::PlaceCanvas,
    LegacyTable::ReadStatus,
    LegacyTable::Reports,
    LegacyTable::UploadTimeout,
    LegacyTable::NotificationThreads,
    LegacyTable::Notifications,
    LegacyTable::NoteTypes,
    LegacyTable::Subjects,
];

/// Temporary input and output directories for one run
pub struct SnapshotDir {
    dir: TempDir,
}

impl SnapshotDir {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("data_json")).unwrap();
        Self { dir }
    }

    pub fn input_dir(&self) -> PathBuf {
        self.dir.path().join("data_json")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("data_new")
    }

    pub fn config(&self) -> MigrationConfig {
        MigrationConfig {
            input_dir: self.input_dir(),
            output_dir: self.output_dir(),
            snapshot_prefix: PREFIX.to_string(),
            ..Default::default()
        }
    }

    /// Write one snapshot, replacing any previous one
    pub fn write(&self, table: LegacyTable, rows: Vec<Value>) {
        let path = self
            .input_dir()
            .join(format!("{}{}.json", PREFIX, table.name()));
        std::fs::write(path, serde_json::to_vec_pretty(&Value::Array(rows)).unwrap()).unwrap();
    }

    /// Write an empty snapshot for every table not yet present
    pub fn fill_empty(&self) {
        for table in ALL_TABLES {
            let path = self
                .input_dir()
                .join(format!("{}{}.json", PREFIX, table.name()));
            if !path.exists() {
                std::fs::write(path, "[]").unwrap();
            }
        }
    }

    pub fn remove(&self, table: LegacyTable) {
        let path = self
            .input_dir()
            .join(format!("{}{}.json", PREFIX, table.name()));
        std::fs::remove_file(path).unwrap();
    }

    pub fn read_artifact(&self, name: &str) -> String {
        std::fs::read_to_string(self.output_dir().join(name)).unwrap()
    }

    pub fn artifact_exists(&self, name: &str) -> bool {
        self.output_dir().join(name).exists()
    }
}

pub fn account(id: i64, username: &str) -> Value {
    json!({
        "id": id,
        "email": format!("{}@example.com", username),
        "username": username,
        "pfpcolor": "a1b2c3",
        "pfptextcolor": "FFFFFF",
        "badsubjects": null,
        "goodsubjects": "NULL",
        "year": "Year 3",
        "school": null,
        "class": null,
        "tag": null,
        "notesno": 0,
        "avgrating": 0,
        "popularity": -2,
        "notesvisited": 5,
        "tries": 0,
        "lockeduntil": "NULL",
        "points": 10,
        "prevpointalloc": 0,
        "file_name": null
    })
}

pub fn note(id: i64, title: &str, type_id: i64) -> Value {
    json!({
        "id": id,
        "title": title,
        "link": "https://docs.example.com/d/1",
        "description": null,
        "subject": "Math",
        "term": "Term 2",
        "type": null,
        "typeID": type_id,
        "topics": "vectors",
        "creator": null,
        "status": "Completed",
        "email": "owner@example.com",
        "date": "2023-01-05",
        "level": "JC 1",
        "visits": 12,
        "total_rating": 9,
        "people_rated": 2,
        "comments": null,
        "multiplier": 1,
        "image": "undefined",
        "file_link": "L"
    })
}

pub fn note_type(type_id: i64, name: &str) -> Value {
    json!({"typeID": type_id, "type": name})
}

pub fn subject(subject_id: i64, name: &str) -> Value {
    json!({"subjectID": subject_id, "subjectName": name})
}

pub fn user_subject(user_id: i64, subject_id: i64, level: &str, strong: bool) -> Value {
    json!({
        "userID": user_id,
        "subjectID": subject_id,
        "jcLevel": level,
        "StrongWeak": if strong { 1 } else { 0 }
    })
}

pub fn note_subject(note_id: i64, subject_id: i64, level: &str) -> Value {
    json!({"noteID": note_id, "jcLevel": level, "subjectID": subject_id})
}

pub fn comment(note_id: i64, user_id: i64, text: &str, time: i64) -> Value {
    json!({"noteid": note_id, "comment": text, "userid": user_id, "time": time})
}

pub fn favourite(user_id: i64, note_id: i64) -> Value {
    json!({"noteID": note_id, "userID": user_id, "dateFavourited": "2022-05-01 12:00:00"})
}

pub fn read_status(user_id: i64, note_id: i64, status: i64) -> Value {
    json!({"userID": user_id, "noteID": note_id, "readStatus": status})
}

pub fn note_creator(user_id: i64, note_id: i64) -> Value {
    json!({"userID": user_id, "noteID": note_id})
}

pub fn note_rating(user_id: i64, note_id: i64, rating: f64) -> Value {
    json!({"noteid": note_id, "userid": user_id, "rating": rating, "dateRated": "2022-05-01 12:00:00"})
}

pub fn pixel(name: &str, x: i64, y: i64, color: &str) -> Value {
    json!({"Name": name, "X": x, "Y": y, "Time": "2022-06-01 10:00:00", "color": color})
}

pub fn report(report_id: i64, user_id: i64, note_id: i64) -> Value {
    json!({
        "reportId": report_id,
        "noteId": note_id,
        "userId": user_id,
        "reason": "Broken link",
        "details": "404 since May",
        "time": 1_672_531_200
    })
}

pub fn upload_timeout(user_id: i64, last_upload: i64) -> Value {
    json!({"userid": user_id, "lastupload": last_upload})
}

pub fn thread(thread_id: i64, note_id: i64, thread_type: i64) -> Value {
    json!({"threadid": thread_id, "title": "Collaborate?", "noteid": note_id, "type": thread_type})
}

pub fn notification(id: i64, thread_id: i64, from: i64, to: i64, status: i64) -> Value {
    json!({
        "notifid": id,
        "sendid": from,
        "recvid": to,
        "message": "Sure, letâ€™s do it",
        "status": status,
        "date": "2022-12-31 20:30:15",
        "threadid": thread_id
    })
}

/// A small export exercising every table
pub fn write_sample_export(snapshots: &SnapshotDir) {
    snapshots.write(
        LegacyTable::Accounts,
        vec![account(1, "alice"), account(2, "bob")],
    );
    snapshots.write(
        LegacyTable::NoteTypes,
        vec![note_type(1, "Document"), note_type(2, "Flashcards")],
    );
    snapshots.write(
        LegacyTable::Notes,
        vec![note(10, "Vectors", 1), note(20, "CafÃ© chemistry", 2)],
    );
    snapshots.write(
        LegacyTable::Subjects,
        vec![subject(1, "Math"), subject(2, "Physics"), subject(3, "Others")],
    );
    snapshots.write(
        LegacyTable::UserSubjects,
        vec![
            user_subject(1, 1, "H2", true),
            user_subject(2, 2, "NULL", false),
        ],
    );
    snapshots.write(
        LegacyTable::NoteSubjectJunction,
        vec![note_subject(10, 1, "NULL"), note_subject(20, 3, "H1")],
    );
    snapshots.write(
        LegacyTable::Comments,
        vec![comment(10, 2, "Nice", 0), comment(20, 1, "Thanks", 60)],
    );
    snapshots.write(LegacyTable::FavouritedNotes, vec![favourite(1, 10)]);
    snapshots.write(LegacyTable::ReadStatus, vec![read_status(2, 20, 2)]);
    snapshots.write(LegacyTable::NoteCreators, vec![note_creator(1, 10)]);
    snapshots.write(
        LegacyTable::NoteRatings,
        vec![note_rating(2, 10, 4.0), note_rating(1, 20, 3.5)],
    );
    snapshots.write(
        LegacyTable::PlaceCanvas,
        vec![pixel("alice", 3, 4, "rgb(0,255,0)"), pixel("bob", 0, 0, "#ffffff")],
    );
    snapshots.write(LegacyTable::Reports, vec![report(1, 2, 20)]);
    snapshots.write(LegacyTable::UploadTimeout, vec![upload_timeout(1, 0)]);
    snapshots.write(LegacyTable::NotificationThreads, vec![thread(5, 10, 0)]);
    snapshots.write(LegacyTable::Notifications, vec![notification(1, 5, 2, 1, 1)]);
}
