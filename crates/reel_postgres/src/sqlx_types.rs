use chrono::{DateTime, Utc};
use reel_core::Profile;

/// Row shape for `profiles`. `profile_key` is never selected.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct PgProfileRow {
    pub id: String,
    pub username: String,
    pub name: String,
    pub avatar: Option<String>,
    pub bio: String,
    pub interests: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<PgProfileRow> for Profile {
    fn from(row: PgProfileRow) -> Self {
        Profile {
            id: row.id,
            username: row.username,
            name: row.name,
            avatar: row.avatar,
            bio: row.bio,
            interests: row.interests,
            created_at: row.created_at,
        }
    }
}
