use std::sync::Arc;
use tracing::{error, info, instrument};

use models::daily_sale::{Model, NewDailySale};

use crate::errors::ServiceError;
use crate::sales::repository::DailySaleRepository;

/// Application service for recording and listing daily sales.
pub struct SalesService<R: DailySaleRepository> {
    repo: Arc<R>,
}

impl<R: DailySaleRepository> Clone for SalesService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: DailySaleRepository> SalesService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(product = %input.product, user_id = input.user_id))]
    pub async fn create(&self, input: NewDailySale) -> Result<Model, ServiceError> {
        match self.repo.create(input).await {
            Ok(m) => {
                info!(id = m.id, date = %m.date, category = %m.category, "sale_created");
                Ok(m)
            }
            Err(e) => {
                error!(err = %e, "sale_create_failed");
                Err(e)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        let rows = self.repo.list().await?;
        info!(count = rows.len(), "sales_listed");
        Ok(rows)
    }
}
