pub mod repository;
pub mod service;

pub use repository::{DailySaleRepository, SeaOrmDailySaleRepository};
pub use service::SalesService;
