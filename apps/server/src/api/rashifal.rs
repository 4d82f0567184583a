use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use patro_core::horoscope::{normalize_horoscope_all, normalize_horoscope_one, HoroscopeEntry};

const FETCH_ALL_FAILED: &str = "Failed to fetch horoscope";
const FETCH_ONE_FAILED: &str = "Failed to fetch specific horoscope";
const SIGN_NOT_FOUND: &str = "Rashifal not found for given sign";

#[utoipa::path(
    get,
    path = "/rashifal",
    responses(
        (status = 200, description = "Prediction for every sunsign"),
        (status = 500, description = "Upstream failure")
    )
)]
pub async fn get_rashifal(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<HoroscopeEntry>>> {
    let horoscope = state
        .fetch_payload("fetch_horoscope_all", state.provider.fetch_horoscope_all())
        .await
        .map_err(|e| ApiError::upstream(FETCH_ALL_FAILED, e))?;
    Ok(Json(normalize_horoscope_all(&horoscope)))
}

#[utoipa::path(
    get,
    path = "/rashifal/{span}/{sign}",
    params(
        ("span" = String, Path, description = "Period label echoed back, e.g. daily"),
        ("sign" = String, Path, description = "Sunsign key, e.g. mesh")
    ),
    responses(
        (status = 200, description = "Prediction for one sunsign"),
        (status = 404, description = "Unknown sunsign"),
        (status = 500, description = "Upstream failure")
    )
)]
pub async fn get_rashifal_for_sign(
    Path((span, sign)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<HoroscopeEntry>> {
    let horoscope = state
        .fetch_payload("fetch_horoscope_all", state.provider.fetch_horoscope_all())
        .await
        .map_err(|e| ApiError::upstream(FETCH_ONE_FAILED, e))?;

    let entry = normalize_horoscope_one(&horoscope, &sign, &span).map_err(|e| {
        tracing::debug!(error = %e, "Sunsign lookup missed");
        ApiError::NotFound(SIGN_NOT_FOUND)
    })?;
    Ok(Json(entry))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rashifal", get(get_rashifal))
        .route("/rashifal/{span}/{sign}", get(get_rashifal_for_sign))
}
