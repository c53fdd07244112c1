//! Remote document store for diaries and entries.

mod firestore;

pub use firestore::FirestoreStore;

use crate::error::Result;
use crate::models::{Diary, DiaryId, Entry, EntryId};

/// Storage operations for diaries.
#[allow(async_fn_in_trait)]
pub trait DiaryRepository {
    /// List all diaries owned by a user, newest first
    async fn list_diaries(&self, token: &str, user_id: &str) -> Result<Vec<Diary>>;

    /// List a user's diaries created inside an inclusive unix-ms window
    async fn list_diaries_in_range(
        &self,
        token: &str,
        user_id: &str,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Vec<Diary>>;

    /// Create or replace a diary document
    async fn upsert_diary(&self, token: &str, diary: &Diary) -> Result<()>;

    /// Best-effort delete; removing an absent document is not an error
    async fn delete_diary(&self, token: &str, id: &DiaryId) -> Result<()>;
}

/// Storage operations for entries.
#[allow(async_fn_in_trait)]
pub trait EntryRepository {
    /// List the entries of one diary, newest first
    async fn list_entries(&self, token: &str, diary_id: &DiaryId) -> Result<Vec<Entry>>;

    /// Create or replace an entry document
    async fn upsert_entry(&self, token: &str, entry: &Entry) -> Result<()>;

    /// Best-effort delete; removing an absent document is not an error
    async fn delete_entry(&self, token: &str, id: &EntryId) -> Result<()>;
}
