use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema, Statement,
};
use tracing::{debug, info};

pub use configs::DatabaseConfig;

use crate::daily_sale;

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if cfg.is_memory() {
        // every pooled connection to `:memory:` is a separate empty database
        opt.max_connections(1).min_connections(1);
    } else {
        opt.max_connections(cfg.max_connections)
            .min_connections(cfg.min_connections)
            .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }
    debug!(url = %cfg.url, memory = cfg.is_memory(), "opening database");
    let db = Database::connect(opt).await?;
    Ok(db)
}

/// Create the `daily_sales` table from the entity definition if it is absent.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let mut stmt = schema.create_table_from_entity(daily_sale::Entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    info!(table = "daily_sales", "schema ensured");
    Ok(())
}

/// Round trip a trivial query.
pub async fn ping(db: &DatabaseConnection) -> Result<(), DbErr> {
    let stmt = Statement::from_string(db.get_database_backend(), "SELECT 1 AS ok".to_string());
    match db.query_one(stmt).await? {
        Some(row) => {
            let ok: i32 = row.try_get("", "ok")?;
            if ok == 1 {
                Ok(())
            } else {
                Err(DbErr::Custom(format!("unexpected ping result {ok}")))
            }
        }
        None => Err(DbErr::Custom("ping returned no rows".into())),
    }
}
