use sea_orm::DatabaseConnection;
use std::sync::Arc;

use service::sales::{SalesService, SeaOrmDailySaleRepository};

/// Shared by every handler; built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub sales: SalesService<SeaOrmDailySaleRepository>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmDailySaleRepository::new(db));
        Self { sales: SalesService::new(repo) }
    }
}
