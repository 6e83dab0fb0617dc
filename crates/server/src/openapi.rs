#![allow(dead_code)]
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub detail: Option<String>,
}

/// Create payload. Numeric fields also accept numeric strings.
#[derive(ToSchema)]
pub struct NewDailySaleDoc {
    #[schema(example = "2024-01-01")]
    pub date: String,
    #[schema(max_length = 50)]
    pub category: String,
    #[schema(max_length = 50)]
    pub product: String,
    #[schema(max_length = 20)]
    pub pack_size: String,
    pub quantity: i64,
    pub price: f64,
    pub total: f64,
    pub user_id: i64,
}

#[derive(ToSchema)]
pub struct DailySaleDoc {
    pub id: i32,
    #[schema(example = "2024-01-01")]
    pub date: String,
    pub category: String,
    pub product: String,
    pub pack_size: String,
    pub quantity: i64,
    pub price: f64,
    pub total: f64,
    pub user_id: i64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::sales::list,
        crate::routes::sales::create,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBody,
            NewDailySaleDoc,
            DailySaleDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "sales")
    )
)]
pub struct ApiDoc;
