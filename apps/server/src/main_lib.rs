use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use patro_core::UpstreamPayload;
use patro_provider::{HamroPatroProvider, PatroProvider, ProviderError};
use serde_json::Value;
use thiserror::Error;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub provider: Arc<dyn PatroProvider>,
    pub upstream_timeout: Duration,
}

/// Why a route could not produce a payload to normalize.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Shape(#[from] patro_core::Error),
}

impl AppState {
    pub fn new(provider: Arc<dyn PatroProvider>, upstream_timeout: Duration) -> Self {
        Self {
            provider,
            upstream_timeout,
        }
    }

    /// Awaits one provider call, bounded by the upstream timeout.
    pub async fn fetch<F>(&self, operation: &'static str, call: F) -> Result<Value, ProviderError>
    where
        F: Future<Output = Result<Value, ProviderError>>,
    {
        tracing::debug!(provider = self.provider.id(), operation, "Calling upstream");
        tokio::time::timeout(self.upstream_timeout, call)
            .await
            .map_err(|_| ProviderError::Timeout { operation })?
    }

    /// Like [`AppState::fetch`], additionally requiring an object payload.
    pub async fn fetch_payload<F>(
        &self,
        operation: &'static str,
        call: F,
    ) -> Result<UpstreamPayload, FetchError>
    where
        F: Future<Output = Result<Value, ProviderError>>,
    {
        let raw = self.fetch(operation, call).await?;
        Ok(UpstreamPayload::try_from(raw)?)
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("PATRO_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let provider =
        HamroPatroProvider::with_timeout(config.upstream_base_url.clone(), config.upstream_timeout);
    tracing::info!(
        provider = provider.id(),
        base_url = provider.base_url(),
        "Upstream provider configured"
    );
    Arc::new(AppState::new(Arc::new(provider), config.upstream_timeout))
}

/// Resolves on ctrl-c. If the handler cannot be installed the error is
/// logged and the server keeps running.
pub async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await;
}

async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
