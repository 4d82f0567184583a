use std::sync::Arc;

use crate::main_lib::AppState;
use axum::{routing::get, Router};

#[utoipa::path(get, path = "/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

/// Ready as soon as the listener is up; upstream availability is not probed.
#[utoipa::path(get, path = "/readyz", responses((status = 200, description = "Ready")))]
pub async fn readyz() -> &'static str {
    "ok"
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
