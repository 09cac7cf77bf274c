//! Fetching quotes from the IEX Cloud batch endpoint.
//!
//! One blocking GET per batch:
//! `{base}/stock/market/batch?symbols=A,B,C&types=quote&token=...`.
//! The token travels only as a query parameter and is never logged.
use std::collections::HashMap;
use std::time::Duration;

use fund_common::net::{IEX_BATCH_TYPES, batch_endpoint};
use fund_common::{Batch, FundError, Quote, QuoteSource, Result};
use log::debug;

use crate::config::ApiToken;
use crate::model::batch_response::parse_batch_response;

/// Timeout applied to each batch request.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Blocking IEX Cloud client.
pub struct IexClient {
    client: reqwest::blocking::Client,
    endpoint: String,
    token: ApiToken,
}

impl IexClient {
    /// Build a client for the API rooted at `base_url`.
    pub fn new(base_url: &str, token: ApiToken) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| FundError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: batch_endpoint(base_url),
            token,
        })
    }
}

impl QuoteSource for IexClient {
    fn name(&self) -> &str {
        "iex_cloud"
    }

    fn fetch_batch(&self, batch: &Batch<'_>) -> Result<HashMap<String, Quote>> {
        let symbols = batch.joined();
        debug!("GET {}?symbols={}&types={}", self.endpoint, symbols, IEX_BATCH_TYPES);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("symbols", symbols.as_str()),
                ("types", IEX_BATCH_TYPES),
                ("token", self.token.expose()),
            ])
            .send()
            .map_err(|e| {
                FundError::FetchFailure(format!(
                    "request for batch {} failed: {}",
                    batch.index(),
                    e.without_url()
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FundError::FetchFailure(format!(
                "HTTP {} for batch {}",
                status,
                batch.index()
            )));
        }

        let body = response.text().map_err(|e| {
            FundError::FetchFailure(format!(
                "reading response for batch {} failed: {}",
                batch.index(),
                e.without_url()
            ))
        })?;
        parse_batch_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_built_from_base_url() {
        let token = ApiToken::new("pk_test").unwrap();
        let client = IexClient::new("https://sandbox.iexapis.com/stable/", token).unwrap();
        assert_eq!(client.endpoint, "https://sandbox.iexapis.com/stable/stock/market/batch");
        assert_eq!(client.name(), "iex_cloud");
    }

    #[test]
    fn unreachable_host_is_fetch_failure() {
        let token = ApiToken::new("pk_test").unwrap();
        let client = IexClient::new("http://127.0.0.1:9", token).unwrap();
        let symbols = vec!["AAPL".parse().unwrap()];
        let batch = fund_common::batch(&symbols, 100).next().unwrap();
        let err = client.fetch_batch(&batch).unwrap_err();
        assert!(matches!(err, FundError::FetchFailure(_)));
        assert!(!err.to_string().contains("pk_test"));
    }
}
