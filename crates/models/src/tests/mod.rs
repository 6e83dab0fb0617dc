


use sea_orm::DatabaseConnection;

use crate::db::{connect_with_config, ensure_schema, DatabaseConfig};

/// Fresh in-memory database with the schema applied.
pub(crate) async fn memory_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    ensure_schema(&db).await?;
    Ok(db)
}

pub(crate) fn milk() -> crate::daily_sale::NewDailySale {
    crate::daily_sale::NewDailySale {
        date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        category: "Dairy".into(),
        product: "Milk".into(),
        pack_size: "1L".into(),
        quantity: 10,
        price: 1.5,
        total: 15.0,
        user_id: 1,
    }
}
