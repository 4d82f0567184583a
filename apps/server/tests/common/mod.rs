#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use patro_provider::{PatroProvider, ProviderError};
use patro_server::{api::app_router, config::Config, AppState};
use serde_json::Value;
use tower::ServiceExt;

/// What a stubbed fetch hands back.
#[derive(Clone)]
pub enum Reply {
    Payload(Value),
    Fail,
    Hang,
}

#[derive(Clone)]
pub struct StubProvider {
    pub date_time: Reply,
    pub horoscope: Reply,
    pub gold: Reply,
    pub forex: Reply,
}

impl StubProvider {
    pub fn failing() -> Self {
        Self {
            date_time: Reply::Fail,
            horoscope: Reply::Fail,
            gold: Reply::Fail,
            forex: Reply::Fail,
        }
    }

    async fn answer(&self, reply: &Reply, page: &'static str) -> Result<Value, ProviderError> {
        match reply {
            Reply::Payload(value) => Ok(value.clone()),
            Reply::Fail => Err(ProviderError::Status { page, status: 502 }),
            Reply::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(Value::Null)
            }
        }
    }
}

#[async_trait]
impl PatroProvider for StubProvider {
    fn id(&self) -> &'static str {
        "STUB"
    }

    async fn fetch_date_time(&self) -> Result<Value, ProviderError> {
        self.answer(&self.date_time, "home").await
    }

    async fn fetch_horoscope_all(&self) -> Result<Value, ProviderError> {
        self.answer(&self.horoscope, "rashifal").await
    }

    async fn fetch_gold_prices(&self) -> Result<Value, ProviderError> {
        self.answer(&self.gold, "gold").await
    }

    async fn fetch_exchange_rates(&self) -> Result<Value, ProviderError> {
        self.answer(&self.forex, "forex").await
    }
}

pub fn test_router(provider: StubProvider) -> Router {
    test_router_with_config(provider, Config::default())
}

pub fn test_router_with_config(provider: StubProvider, config: Config) -> Router {
    let state = Arc::new(AppState::new(
        Arc::new(provider),
        Duration::from_millis(200),
    ));
    app_router(state, &config)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}
