#![cfg(test)]
use sea_orm::DatabaseConnection;
use models::daily_sale::NewDailySale;
use models::db::{connect_with_config, ensure_schema, DatabaseConfig};

fn memory_config() -> DatabaseConfig {
    DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() }
}

/// Fresh in-memory database with `daily_sales` created.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = get_db_without_schema().await?;
    ensure_schema(&db).await?;
    Ok(db)
}

/// In-memory database with no tables, for exercising storage failures.
pub async fn get_db_without_schema() -> Result<DatabaseConnection, anyhow::Error> {
    Ok(connect_with_config(&memory_config()).await?)
}

pub fn sample(product: &str) -> NewDailySale {
    NewDailySale {
        date: chrono::NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        category: "Nutrition".into(),
        product: product.into(),
        pack_size: "250".into(),
        quantity: 4,
        price: 12.5,
        total: 50.0,
        user_id: 3,
    }
}
