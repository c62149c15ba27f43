//! Idempotent schema bootstrap.
//!
//! `profile_key` is the storage surrogate and never leaves this crate. The
//! named unique constraints are how `insert_if_absent` tells an existing
//! profile apart from a taken username.

use sqlx::PgPool;
use tracing::info;

pub(crate) const ID_CONSTRAINT: &str = "profiles_id_key";
pub(crate) const USERNAME_CONSTRAINT: &str = "profiles_username_key";

const CREATE_PROFILES: &str = r#"
CREATE TABLE IF NOT EXISTS profiles (
    profile_key BIGSERIAL PRIMARY KEY,
    id          TEXT        NOT NULL CONSTRAINT profiles_id_key UNIQUE,
    username    TEXT        NOT NULL CONSTRAINT profiles_username_key UNIQUE
                            CHECK (username = lower(username)),
    name        TEXT        NOT NULL,
    avatar      TEXT,
    bio         TEXT        NOT NULL,
    interests   TEXT[]      NOT NULL DEFAULT '{}',
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_PROFILES).execute(pool).await?;
    info!("profiles schema ready");
    Ok(())
}
