//! Hamro Patro provider.
//!
//! Fetches the public Hamro Patro pages and scrapes them into JSON objects.
//! Every call downloads the page again; nothing is cached.

mod parse;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::errors::ProviderError;
use crate::provider::PatroProvider;

pub use parse::{parse_date_time, parse_exchange_rates, parse_gold_prices, parse_horoscope};

/// Provider ID constant
const PROVIDER_ID: &str = "HAMRO_PATRO";

/// Public site scraped when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://www.hamropatro.com";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("patro-api/", env!("CARGO_PKG_VERSION"));

/// The pages this provider reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Rashifal,
    Gold,
    Forex,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Rashifal => "/rashifal",
            Page::Gold => "/gold",
            Page::Forex => "/forex",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Rashifal => "rashifal",
            Page::Gold => "gold",
            Page::Forex => "forex",
        }
    }
}

/// Scrapes Hamro Patro over HTTP.
///
/// # Example
///
/// ```ignore
/// use patro_provider::HamroPatroProvider;
///
/// let provider = HamroPatroProvider::new("https://www.hamropatro.com");
/// ```
pub struct HamroPatroProvider {
    client: Client,
    base_url: String,
}

impl HamroPatroProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, page: Page) -> String {
        format!("{}{}", self.base_url, page.path())
    }

    async fn fetch_page(&self, page: Page) -> Result<String, ProviderError> {
        let url = self.url_for(page);
        tracing::debug!(provider = PROVIDER_ID, %url, "Fetching page");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                page: page.name(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl PatroProvider for HamroPatroProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_date_time(&self) -> Result<Value, ProviderError> {
        let html = self.fetch_page(Page::Home).await?;
        parse_date_time(&html)
    }

    async fn fetch_horoscope_all(&self) -> Result<Value, ProviderError> {
        let html = self.fetch_page(Page::Rashifal).await?;
        parse_horoscope(&html)
    }

    async fn fetch_gold_prices(&self) -> Result<Value, ProviderError> {
        let html = self.fetch_page(Page::Gold).await?;
        parse_gold_prices(&html)
    }

    async fn fetch_exchange_rates(&self) -> Result<Value, ProviderError> {
        let html = self.fetch_page(Page::Forex).await?;
        parse_exchange_rates(&html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_id() {
        let provider = HamroPatroProvider::new(DEFAULT_BASE_URL);
        assert_eq!(provider.id(), "HAMRO_PATRO");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let provider = HamroPatroProvider::new("http://localhost:8080/");
        assert_eq!(provider.base_url(), "http://localhost:8080");
        assert_eq!(provider.url_for(Page::Gold), "http://localhost:8080/gold");
        assert_eq!(provider.url_for(Page::Home), "http://localhost:8080/");
    }
}
