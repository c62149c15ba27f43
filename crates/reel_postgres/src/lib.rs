//! reel_postgres — Postgres adapter for the `reel_core` profile store port.
//!
//! All SQL is runtime-checked (`sqlx::query`, not `sqlx::query!`) so builds do
//! not need a live database.

pub mod pool;
pub mod schema;
mod sqlx_types;
pub mod store;

pub use pool::{connect, DatabaseConfig};
pub use schema::ensure_schema;
pub use store::PgProfileStore;
