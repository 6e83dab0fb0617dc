use axum::{extract::{rejection::JsonRejection, State}, http::StatusCode, Json};
use models::daily_sale::{Model, NewDailySale};
use tracing::warn;

use crate::{errors::JsonApiError, state::AppState};

#[utoipa::path(
    get, path = "/sales", tag = "sales",
    responses(
        (status = 200, description = "All sales, oldest first", body = [crate::openapi::DailySaleDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorBody)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Model>>, JsonApiError> {
    state
        .sales
        .list()
        .await
        .map(Json)
        .map_err(|e| JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "List Failed", Some(e.to_string())))
}

#[utoipa::path(
    post, path = "/sales", tag = "sales",
    request_body = crate::openapi::NewDailySaleDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::DailySaleDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorBody),
        (status = 500, description = "Create Failed", body = crate::openapi::ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewDailySale>, JsonRejection>,
) -> Result<(StatusCode, Json<Model>), JsonApiError> {
    let Json(input) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "sale_payload_rejected");
        JsonApiError::from(rejection)
    })?;
    match state.sales.create(input).await {
        Ok(m) => Ok((StatusCode::CREATED, Json(m))),
        Err(e) => Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Create Failed", Some(e.to_string()))),
    }
}
