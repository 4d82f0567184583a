use std::sync::Arc;

use crate::{config::Config, main_lib::AppState};
use axum::{http::HeaderValue, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

pub mod datetime;
pub mod health;
pub mod markets;
pub mod rashifal;

#[derive(OpenApi)]
#[openapi(
    info(title = "Patro API", description = "Nepali date, rashifal, gold and forex data"),
    paths(
        health::healthz,
        health::readyz,
        datetime::get_date_time,
        rashifal::get_rashifal,
        rashifal::get_rashifal_for_sign,
        markets::get_gold_prices,
        markets::get_exchange_rates,
    )
)]
pub struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.allows_any_origin() {
        return cors.allow_origin(Any);
    }

    let origins = config
        .cors_allow
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect::<Vec<_>>();
    cors.allow_origin(origins)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    Router::new()
        .merge(health::router())
        .merge(datetime::router())
        .merge(rashifal::router())
        .merge(markets::router())
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors_layer(config))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
