use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use patro_provider::provider::hamro_patro::DEFAULT_BASE_URL;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 15_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Upper bound on a single provider call.
    pub upstream_timeout: Duration,
    pub upstream_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            upstream_timeout: Duration::from_millis(DEFAULT_UPSTREAM_TIMEOUT_MS),
            upstream_base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let listen_addr: SocketAddr = lookup("PATRO_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("Invalid PATRO_LISTEN_ADDR")?;
        let cors_allow = lookup("PATRO_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let request_timeout =
            millis(&lookup, "PATRO_REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS)?;
        let upstream_timeout =
            millis(&lookup, "PATRO_UPSTREAM_TIMEOUT_MS", DEFAULT_UPSTREAM_TIMEOUT_MS)?;
        let upstream_base_url =
            lookup("PATRO_UPSTREAM_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout,
            upstream_timeout,
            upstream_base_url,
        })
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_allow.is_empty() || self.cors_allow.iter().any(|o| o == "*")
    }
}

fn millis(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: u64,
) -> anyhow::Result<Duration> {
    let ms = match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("Invalid {key}: expected milliseconds, got {raw:?}"))?,
        None => default,
    };
    Ok(Duration::from_millis(ms))
}
