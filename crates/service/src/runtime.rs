//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so startup code imports
//! `service::runtime::ensure_env` next to the rest of the service layer.

/// Ensure the database file's directory exists.
pub async fn ensure_env(database_url: &str) -> anyhow::Result<()> {
    common::env::ensure_env(database_url).await
}
