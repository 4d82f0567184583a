use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{extract::State, routing::get, Json, Router};
use serde_json::Value;

const FETCH_FAILED: &str = "Failed to fetch date and time";

/// Today's Nepali date and time, exactly as the upstream reports it.
#[utoipa::path(
    get,
    path = "/datetime",
    responses(
        (status = 200, description = "Upstream date and time object"),
        (status = 500, description = "Upstream failure")
    )
)]
pub async fn get_date_time(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let date_time = state
        .fetch("fetch_date_time", state.provider.fetch_date_time())
        .await
        .map_err(|e| ApiError::upstream(FETCH_FAILED, e))?;
    Ok(Json(date_time))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/datetime", get(get_date_time))
}
