use std::{future::Future, net::SocketAddr};

use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{errors::StartupError, routes, state::AppState};
use service::runtime;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Prepare the database file, open the pool and create the table if absent.
pub async fn build_state(db_cfg: &DatabaseConfig) -> anyhow::Result<AppState> {
    runtime::ensure_env(&db_cfg.url)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;
    let db = models::db::connect_with_config(db_cfg).await?;
    models::db::ensure_schema(&db).await?;
    models::db::ping(&db).await?;
    info!(memory = db_cfg.is_memory(), "database ready");
    Ok(AppState::new(db))
}

pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Load and validate `config.toml` (or the environment when it is absent).
pub fn load_config() -> Result<AppConfig, StartupError> {
    AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(format!("{e:#}")))
}

/// Public entry: build the app from `cfg` and run the HTTP server until `shutdown` resolves.
pub async fn run_until<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    // 数据库与状态：建目录、连库、建表
    let state = build_state(&cfg.database).await?;
    let app = build_app(state);

    // Bind and serve
    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting server crate");
    let listener = TcpListener::bind(addr).await?;
    serve(listener, app, shutdown).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "0.0.0.0".into();
        cfg.server.port = 8099;
        assert_eq!(bind_addr(&cfg).unwrap(), "0.0.0.0:8099".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn bind_addr_rejects_bad_host() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(bind_addr(&cfg).is_err());
    }

    #[tokio::test]
    async fn run_until_stops_on_shutdown() -> anyhow::Result<()> {
        let mut cfg = AppConfig::default();
        cfg.server.port = free_port()?;
        cfg.database.url = "sqlite::memory:".into();
        run_until(cfg, async {}).await
    }

    fn free_port() -> anyhow::Result<u16> {
        let listener = std::net::TcpListener::bind(("127.0.0.1", 0))?;
        Ok(listener.local_addr()?.port())
    }

    #[tokio::test]
    async fn build_state_on_memory_database() -> anyhow::Result<()> {
        let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
        let state = build_state(&cfg).await?;
        assert!(state.sales.list().await?.is_empty());
        Ok(())
    }
}
