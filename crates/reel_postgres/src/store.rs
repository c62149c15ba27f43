//! Postgres implementation of [`ProfileStore`].

use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::PgPool;

use reel_core::ports::{InsertOutcome, ProfileStore, Result};
use reel_core::Profile;

use crate::schema::{ID_CONSTRAINT, USERNAME_CONSTRAINT};
use crate::sqlx_types::PgProfileRow;

const SELECT_PROFILE: &str = r#"
    SELECT id, username, name, avatar, bio, interests, created_at
    FROM profiles
"#;

/// Postgres-backed profile store.
#[derive(Clone)]
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn find_one(&self, column: &str, value: &str) -> Result<Option<Profile>> {
        let query = format!("{SELECT_PROFILE} WHERE {column} = $1");
        let row = sqlx::query_as::<_, PgProfileRow>(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| anyhow!(e))?;
        Ok(row.map(Profile::from))
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Profile>> {
        self.find_one("id", id).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Profile>> {
        self.find_one("username", username).await
    }

    async fn insert_if_absent(&self, profile: &Profile) -> Result<InsertOutcome> {
        let result = sqlx::query(
            r#"
            INSERT INTO profiles (id, username, name, avatar, bio, interests, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&profile.id)
        .bind(&profile.username)
        .bind(&profile.name)
        .bind(&profile.avatar)
        .bind(&profile.bio)
        .bind(&profile.interests)
        .bind(profile.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                match db.constraint() {
                    Some(ID_CONSTRAINT) => Ok(InsertOutcome::IdExists),
                    Some(USERNAME_CONSTRAINT) => Ok(InsertOutcome::UsernameTaken),
                    other => Err(anyhow!(
                        "unexpected unique violation on {:?}: {}",
                        other,
                        db.message()
                    )
                    .into()),
                }
            }
            Err(e) => Err(anyhow!(e).into()),
        }
    }
}
