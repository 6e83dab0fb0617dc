//! Environment/runtime helpers
//!
//! Sanity checks to ensure the SQLite file can be created at startup.

use std::path::PathBuf;

use tracing::{info, warn};

/// Extract the on-disk path from a `sqlite:` URL.
///
/// Returns `None` for in-memory databases and for URLs of other schemes.
pub fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Ensure the directory holding the database file exists.
pub async fn ensure_env(database_url: &str) -> anyhow::Result<()> {
    let Some(path) = sqlite_file_path(database_url) else {
        warn!(%database_url, "database is not file backed; records will not survive a restart");
        return Ok(());
    };
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    }
    info!(path = %path.display(), "database file location ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_path_from_sqlite_urls() {
        assert_eq!(
            sqlite_file_path("sqlite://data/sales.db?mode=rwc"),
            Some(PathBuf::from("data/sales.db"))
        );
        assert_eq!(
            sqlite_file_path("sqlite:/tmp/x.db"),
            Some(PathBuf::from("/tmp/x.db"))
        );
    }

    #[test]
    fn memory_and_foreign_urls_have_no_path() {
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://localhost/db"), None);
    }

    #[tokio::test]
    async fn ensure_env_creates_parent_dir() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("sales-env-{}", uuid::Uuid::new_v4()));
        let url = format!("sqlite://{}/nested/sales.db?mode=rwc", dir.display());
        ensure_env(&url).await?;
        assert!(dir.join("nested").is_dir());
        tokio::fs::remove_dir_all(&dir).await?;
        Ok(())
    }
}
