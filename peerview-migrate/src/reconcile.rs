//! Reading list reconciler
//!
//! Folds legacy favourites and read statuses into the reading list model.
//! Every account gets three lists (Favourites, Reading, Read) and each
//! interaction becomes one entry in the matching list.
//!
//! Ids come from two run-wide counters, one for lists and one for entries,
//! advanced in account load order. Account `k` (from 1) therefore owns lists
//! `3k-2`, `3k-1` and `3k`, and reruns on the same input assign the same ids.

use crate::records::{FavoritedNote, NoteListEntry, ReadStatus, ReadingList};
use peerview_common::enums::{NoteReadStatus, ReadingListType};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Built-in lists created for every account, in id order
const BUILT_IN_LISTS: [(&str, ReadingListType); 3] = [
    ("Favourites", ReadingListType::Favorites),
    ("Reading", ReadingListType::Reading),
    ("Read", ReadingListType::Read),
];

/// Output of one reconciliation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reconciliation {
    pub reading_lists: Vec<ReadingList>,
    pub entries: Vec<NoteListEntry>,
    /// Favourite and read status rows whose user matches no account
    pub orphaned_rows: usize,
}

/// Group rows by user id, keeping load order inside each group
fn group_by_user<T>(rows: &[T], user_id: impl Fn(&T) -> i64) -> HashMap<i64, Vec<&T>> {
    let mut groups: HashMap<i64, Vec<&T>> = HashMap::new();
    for row in rows {
        groups.entry(user_id(row)).or_default().push(row);
    }
    groups
}

/// Count rows belonging to no account
fn orphans<T>(groups: &HashMap<i64, Vec<&T>>, accounts: &HashSet<i64>) -> usize {
    groups
        .iter()
        .filter(|(user_id, _)| !accounts.contains(user_id))
        .map(|(_, rows)| rows.len())
        .sum()
}

/// Merge favourites and read statuses over `account_ids` (in load order)
pub fn reconcile(
    account_ids: &[i64],
    favorites: &[FavoritedNote],
    read_statuses: &[ReadStatus],
) -> Reconciliation {
    let favorites_by_user = group_by_user(favorites, |f| f.user_id);
    let statuses_by_user = group_by_user(read_statuses, |r| r.user_id);

    let mut reading_lists = Vec::with_capacity(account_ids.len() * BUILT_IN_LISTS.len());
    let mut entries = Vec::new();
    let mut next_entry_id = 1;
    let mut add_entry = |entries: &mut Vec<NoteListEntry>, note_id: i64, list_id: i64| {
        entries.push(NoteListEntry {
            id: next_entry_id,
            note_id,
            list_id,
        });
        next_entry_id += 1;
    };

    for &user_id in account_ids {
        let first_list_id = reading_lists.len() as i64 + 1;
        for (name, list_type) in BUILT_IN_LISTS {
            reading_lists.push(ReadingList {
                id: reading_lists.len() as i64 + 1,
                user_id,
                name: name.to_string(),
                list_type,
            });
        }
        let favourites_list = first_list_id;
        let reading_list = first_list_id + 1;
        let read_list = first_list_id + 2;

        if let Some(rows) = favorites_by_user.get(&user_id) {
            for favorite in rows {
                add_entry(&mut entries, favorite.note_id, favourites_list);
            }
        }

        if let Some(rows) = statuses_by_user.get(&user_id) {
            for status in rows {
                match status.status {
                    NoteReadStatus::Reading => add_entry(&mut entries, status.note_id, reading_list),
                    NoteReadStatus::Read => add_entry(&mut entries, status.note_id, read_list),
                    NoteReadStatus::Unread => {}
                }
            }
        }
    }

    let known: HashSet<i64> = account_ids.iter().copied().collect();
    let orphaned_rows = orphans(&favorites_by_user, &known) + orphans(&statuses_by_user, &known);
    if orphaned_rows > 0 {
        warn!(
            orphaned_rows,
            "Favourite or read status rows reference no account and were skipped"
        );
    }

    debug!(
        accounts = account_ids.len(),
        reading_lists = reading_lists.len(),
        entries = entries.len(),
        "Reading lists reconciled"
    );

    Reconciliation {
        reading_lists,
        entries,
        orphaned_rows,
    }
}
