use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::daily_sale::{self, Model, NewDailySale};

use crate::errors::ServiceError;

/// Persistence seam for daily sales.
#[async_trait]
pub trait DailySaleRepository: Send + Sync {
    async fn create(&self, input: NewDailySale) -> Result<Model, ServiceError>;
    async fn list(&self) -> Result<Vec<Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmDailySaleRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmDailySaleRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl DailySaleRepository for SeaOrmDailySaleRepository {
    async fn create(&self, input: NewDailySale) -> Result<Model, ServiceError> {
        Ok(daily_sale::create(&self.db, input).await?)
    }

    async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        Ok(daily_sale::list_all(&self.db).await?)
    }
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockDailySaleRepository {
        rows: Mutex<Vec<Model>>,
        /// When set, every call fails with a database error.
        pub broken: bool,
    }

    impl MockDailySaleRepository {
        pub fn broken() -> Self { Self { broken: true, ..Default::default() } }
    }

    #[async_trait]
    impl DailySaleRepository for MockDailySaleRepository {
        async fn create(&self, input: NewDailySale) -> Result<Model, ServiceError> {
            if self.broken {
                return Err(ServiceError::Db("mock repository is broken".into()));
            }
            let mut rows = self.rows.lock().map_err(|e| ServiceError::Db(e.to_string()))?;
            let id = rows.last().map(|r| r.id + 1).unwrap_or(1);
            let NewDailySale { date, category, product, pack_size, quantity, price, total, user_id } = input;
            let row = Model { id, date, category, product, pack_size, quantity, price, total, user_id };
            rows.push(row.clone());
            Ok(row)
        }

        async fn list(&self) -> Result<Vec<Model>, ServiceError> {
            if self.broken {
                return Err(ServiceError::Db("mock repository is broken".into()));
            }
            let rows = self.rows.lock().map_err(|e| ServiceError::Db(e.to_string()))?;
            Ok(rows.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, get_db_without_schema, sample};

    #[tokio::test]
    async fn seaorm_create_then_list() -> Result<(), anyhow::Error> {
        let repo = SeaOrmDailySaleRepository::new(get_db().await?);
        assert!(repo.list().await?.is_empty());

        let a = repo.create(sample("Seagold")).await?;
        let b = repo.create(sample("Polysil")).await?;
        assert_ne!(a.id, b.id);

        assert_eq!(repo.list().await?, vec![a, b]);
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_create_without_schema_is_model_error() -> Result<(), anyhow::Error> {
        let repo = SeaOrmDailySaleRepository::new(get_db_without_schema().await?);
        let err = repo.create(sample("Azokon")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)), "{err:?}");
        assert!(matches!(repo.list().await, Err(ServiceError::Model(_))));
        Ok(())
    }
}
