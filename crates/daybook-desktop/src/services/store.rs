//! Diary store access scoped to the active session.

use daybook_core::error::Result;
use daybook_core::models::{Diary, DiaryId, Entry, EntryId};
use daybook_core::store::{DiaryRepository, EntryRepository, FirestoreStore};

use super::AuthSession;

/// Store client bound to one signed-in user.
///
/// Rebuilt on every sign-in, so each request carries the session's identity
/// token and queries scope to its user id.
#[derive(Clone)]
pub struct DiaryService {
    store: FirestoreStore,
    session: AuthSession,
}

impl DiaryService {
    pub fn new(project_id: &str, session: AuthSession) -> Result<Self> {
        Ok(Self {
            store: FirestoreStore::new(project_id)?,
            session,
        })
    }

    fn token(&self) -> &str {
        &self.session.id_token
    }

    fn user_id(&self) -> &str {
        &self.session.user.id
    }

    /// List the user's diaries, newest first
    pub async fn list_diaries(&self) -> Result<Vec<Diary>> {
        self.store.list_diaries(self.token(), self.user_id()).await
    }

    /// List the user's diaries created inside an inclusive unix-ms window
    pub async fn list_diaries_in_range(&self, start_ms: i64, end_ms: i64) -> Result<Vec<Diary>> {
        self.store
            .list_diaries_in_range(self.token(), self.user_id(), start_ms, end_ms)
            .await
    }

    /// Create or replace a diary
    pub async fn upsert_diary(&self, diary: &Diary) -> Result<()> {
        self.store.upsert_diary(self.token(), diary).await
    }

    /// Best-effort diary delete
    pub async fn delete_diary(&self, id: &DiaryId) -> Result<()> {
        self.store.delete_diary(self.token(), id).await
    }

    /// List one diary's entries, newest first
    pub async fn list_entries(&self, diary_id: &DiaryId) -> Result<Vec<Entry>> {
        self.store.list_entries(self.token(), diary_id).await
    }

    /// Create or replace an entry
    pub async fn upsert_entry(&self, entry: &Entry) -> Result<()> {
        self.store.upsert_entry(self.token(), entry).await
    }

    /// Best-effort entry delete
    pub async fn delete_entry(&self, id: &EntryId) -> Result<()> {
        self.store.delete_entry(self.token(), id).await
    }
}
