use crate::domain::currency::RateSource;
use crate::infrastructure::http_client_factory::HttpClientFactory;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::info;

pub const DEFAULT_ER_API_URL: &str = "https://open.er-api.com/v6/latest/USD";

#[derive(Debug, Deserialize)]
struct ErApiResponse {
    result: Option<String>,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    #[serde(default)]
    rates: HashMap<String, f64>,
}

/// Exchange rates from the open ExchangeRate-API (`open.er-api.com`).
pub struct ErApiRateSource {
    client: Client,
    url: String,
}

impl ErApiRateSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: HttpClientFactory::create_client(timeout),
            url: url.into(),
        }
    }
}

fn extract_rate(body: &ErApiResponse, currency: &str) -> anyhow::Result<f64> {
    if let Some(result) = body.result.as_deref() {
        if result != "success" {
            anyhow::bail!(
                "ExchangeRate-API returned result '{}' ({})",
                result,
                body.error_type.as_deref().unwrap_or("no error type")
            );
        }
    }

    let rate = body
        .rates
        .get(currency)
        .copied()
        .with_context(|| format!("No {} rate in ExchangeRate-API response", currency))?;

    if !rate.is_finite() || rate <= 0.0 {
        anyhow::bail!("ExchangeRate-API returned an invalid {} rate: {}", currency, rate);
    }
    Ok(rate)
}

#[async_trait]
impl RateSource for ErApiRateSource {
    async fn fetch_rate(&self, currency: &str) -> anyhow::Result<f64> {
        info!("Fetching USD/{} rate from ExchangeRate-API...", currency);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to send request to ExchangeRate-API")?;

        if !response.status().is_success() {
            anyhow::bail!("ExchangeRate-API returned status: {}", response.status());
        }

        let body: ErApiResponse = response
            .json()
            .await
            .context("Failed to parse ExchangeRate-API response")?;

        extract_rate(&body, currency)
    }

    fn name(&self) -> &str {
        "ExchangeRate-API"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ErApiResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_extract_rate_success() {
        let body = parse(
            r#"{"result":"success","base_code":"USD","rates":{"USD":1,"INR":83.42,"EUR":0.92}}"#,
        );
        assert_eq!(extract_rate(&body, "INR").unwrap(), 83.42);
        assert_eq!(extract_rate(&body, "EUR").unwrap(), 0.92);
    }

    #[test]
    fn test_extract_rate_missing_currency() {
        let body = parse(r#"{"result":"success","rates":{"USD":1}}"#);
        let err = extract_rate(&body, "INR").unwrap_err();
        assert!(err.to_string().contains("INR"));
    }

    #[test]
    fn test_extract_rate_error_result() {
        let body = parse(r#"{"result":"error","error-type":"unsupported-code"}"#);
        let err = extract_rate(&body, "INR").unwrap_err();
        assert!(err.to_string().contains("unsupported-code"));
    }

    #[test]
    fn test_extract_rate_rejects_zero() {
        let body = parse(r#"{"rates":{"INR":0.0}}"#);
        assert!(extract_rate(&body, "INR").is_err());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        let source = ErApiRateSource::new("http://127.0.0.1:9/v6/latest/USD", Duration::from_secs(1));
        assert!(source.fetch_rate("INR").await.is_err());
    }
}
