use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{extract::State, routing::get, Json, Router};
use patro_core::rates::{
    normalize_exchange_rates, normalize_gold_prices, Envelope, PriceEntry, RateEntry,
};

const GOLD_FAILED: &str = "Failed to fetch gold prices";
const FOREX_FAILED: &str = "Failed to fetch exchange rates";

#[utoipa::path(
    get,
    path = "/gold",
    responses(
        (status = 200, description = "Gold and silver prices with their update stamp"),
        (status = 500, description = "Upstream failure")
    )
)]
pub async fn get_gold_prices(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Envelope<PriceEntry>>> {
    let prices = state
        .fetch_payload("fetch_gold_prices", state.provider.fetch_gold_prices())
        .await
        .map_err(|e| ApiError::upstream(GOLD_FAILED, e))?;
    Ok(Json(normalize_gold_prices(&prices)))
}

#[utoipa::path(
    get,
    path = "/forex",
    responses(
        (status = 200, description = "Exchange rates with their update stamp"),
        (status = 500, description = "Upstream failure")
    )
)]
pub async fn get_exchange_rates(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Envelope<RateEntry>>> {
    let rates = state
        .fetch_payload("fetch_exchange_rates", state.provider.fetch_exchange_rates())
        .await
        .map_err(|e| ApiError::upstream(FOREX_FAILED, e))?;
    Ok(Json(normalize_exchange_rates(&rates)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/gold", get(get_gold_prices))
        .route("/forex", get(get_exchange_rates))
}
