//! In-process `ProfileStore`, used by tests and `REEL_STORE=memory`.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::ports::{InsertOutcome, ProfileStore, Result};
use crate::profile::Profile;

#[derive(Default)]
struct Inner {
    by_id: HashMap<String, Profile>,
    /// username → user id
    usernames: HashMap<String, String>,
}

#[derive(Default)]
pub struct MemoryProfileStore {
    inner: RwLock<Inner>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Profile>> {
        Ok(self.inner.read().await.by_id.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Profile>> {
        let inner = self.inner.read().await;
        Ok(inner
            .usernames
            .get(username)
            .and_then(|id| inner.by_id.get(id))
            .cloned())
    }

    async fn insert_if_absent(&self, profile: &Profile) -> Result<InsertOutcome> {
        let mut inner = self.inner.write().await;
        if inner.by_id.contains_key(&profile.id) {
            return Ok(InsertOutcome::IdExists);
        }
        if inner.usernames.contains_key(&profile.username) {
            return Ok(InsertOutcome::UsernameTaken);
        }
        inner
            .usernames
            .insert(profile.username.clone(), profile.id.clone());
        inner.by_id.insert(profile.id.clone(), profile.clone());
        Ok(InsertOutcome::Inserted)
    }
}
