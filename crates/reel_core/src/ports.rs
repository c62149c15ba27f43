//! Storage port implemented by `reel_postgres` and [`crate::memory`].

use async_trait::async_trait;

use crate::error::ProfileError;
use crate::profile::Profile;

pub type Result<T> = std::result::Result<T, ProfileError>;

/// Result of a conditional insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// A profile already exists for this user id.
    IdExists,
    /// Another profile already owns this username.
    UsernameTaken,
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Profile>>;

    /// Lookup by username. Callers pass the lowercased form.
    async fn find_by_username(&self, username: &str) -> Result<Option<Profile>>;

    /// Insert only if neither the id nor the username is already present.
    /// The check and the write are a single atomic step.
    async fn insert_if_absent(&self, profile: &Profile) -> Result<InsertOutcome>;
}
