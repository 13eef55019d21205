//! HTTP transport layer for CoinMarketCap API requests
//!
//! The transport turns an [`Endpoint`] and a normalized [`Query`] into a
//! [`FetchRequest`] and hands it to a [`Fetcher`]. Whatever the fetcher
//! returns, value or error, goes back to the caller untouched.

use crate::params::Query;
use async_trait::async_trait;
use cmc_core::{Config, Endpoint, Error, Result, API_KEY_HEADER};
use reqwest::Client;
use serde_json::{Map, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

const USER_AGENT: &str = concat!("cmc-client/", env!("CARGO_PKG_VERSION"));

/// A fully built outbound request
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
  /// Absolute URL including the query string
  pub url: String,

  /// Headers to send, including the API key
  pub headers: Vec<(String, String)>,

  /// Opaque fetch options from [`Config::fetch_config`]
  pub config: Map<String, Value>,
}

impl FetchRequest {
  /// Decoded query parameters of the URL, in order
  pub fn query_pairs(&self) -> Vec<(String, String)> {
    Url::parse(&self.url)
      .map(|url| url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect())
      .unwrap_or_default()
  }

  /// Decoded value of one query parameter
  pub fn query_param(&self, key: &str) -> Option<String> {
    self.query_pairs().into_iter().find(|(k, _)| k == key).map(|(_, v)| v)
  }

  /// URL path, e.g. `/v1/cryptocurrency/map`
  pub fn path(&self) -> Option<String> {
    Url::parse(&self.url).ok().map(|url| url.path().to_string())
  }

  /// Value of a header by case-insensitive name
  pub fn header(&self, name: &str) -> Option<&str> {
    self.headers.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
  }
}

/// Performs the HTTP request and returns the parsed response body
///
/// Implement this to route requests through a different HTTP stack, a proxy,
/// or a test double.
#[async_trait]
pub trait Fetcher: Send + Sync {
  /// Execute one request
  async fn fetch(&self, request: FetchRequest) -> Result<Value>;
}

/// Default fetcher backed by `reqwest`
///
/// Understands two keys of the opaque fetch config:
/// - `headers`: object of extra header values
/// - `timeout`: request timeout in milliseconds
#[derive(Debug, Clone)]
pub struct HttpFetcher {
  client: Client,
}

impl HttpFetcher {
  /// Create a fetcher with its own HTTP client
  pub fn new() -> Result<Self> {
    let client = Client::builder()
      .user_agent(USER_AGENT)
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self { client })
  }

  /// Reuse an existing HTTP client
  pub fn with_client(client: Client) -> Self {
    Self { client }
  }
}

#[async_trait]
impl Fetcher for HttpFetcher {
  #[instrument(skip(self, request), fields(url = %request.url))]
  async fn fetch(&self, request: FetchRequest) -> Result<Value> {
    let mut builder = self.client.get(&request.url);

    for (name, value) in &request.headers {
      builder = builder.header(name.as_str(), value.as_str());
    }

    for (key, option) in &request.config {
      match (key.as_str(), option) {
        ("headers", Value::Object(headers)) => {
          for (name, value) in headers {
            match value.as_str() {
              Some(value) => builder = builder.header(name.as_str(), value),
              None => debug!("Skipping non-string header {}", name),
            }
          }
        }
        ("timeout", timeout) => match timeout.as_u64() {
          Some(ms) => builder = builder.timeout(Duration::from_millis(ms)),
          None => debug!("Ignoring non-numeric timeout {}", timeout),
        },
        _ => debug!("Ignoring unsupported fetch option {}", key),
      }
    }

    let response =
      builder.send().await.map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
      warn!("Upstream responded with status {}", status);
    }

    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

    debug!("Response body length: {} bytes", text.len());

    serde_json::from_str(&text).map_err(|e| {
      Error::InvalidResponse(format!(
        "Failed to parse response: {}. Response: {}",
        e,
        text.chars().take(200).collect::<String>()
      ))
    })
  }
}

/// Test double that records requests and answers with a canned response
#[derive(Debug, Default)]
pub struct RecordingFetcher {
  response: Value,
  failure: Option<String>,
  calls: Mutex<Vec<FetchRequest>>,
}

impl RecordingFetcher {
  /// Answer every request with `response`
  pub fn new(response: Value) -> Self {
    Self { response, failure: None, calls: Mutex::new(Vec::new()) }
  }

  /// Fail every request with an [`Error::Http`] carrying `message`
  pub fn failing(message: impl Into<String>) -> Self {
    Self { response: Value::Null, failure: Some(message.into()), calls: Mutex::new(Vec::new()) }
  }

  /// Every request seen so far
  pub fn calls(&self) -> Vec<FetchRequest> {
    self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
  }

  /// Number of requests seen
  pub fn call_count(&self) -> usize {
    self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
  }

  /// Most recent request, if any
  pub fn last_request(&self) -> Option<FetchRequest> {
    self.calls.lock().unwrap_or_else(|e| e.into_inner()).last().cloned()
  }
}

#[async_trait]
impl Fetcher for RecordingFetcher {
  async fn fetch(&self, request: FetchRequest) -> Result<Value> {
    self.calls.lock().unwrap_or_else(|e| e.into_inner()).push(request);

    match &self.failure {
      Some(message) => Err(Error::Http(message.clone())),
      None => Ok(self.response.clone()),
    }
  }
}

/// Builds requests from configuration and dispatches them through a fetcher
pub struct Transport {
  config: Config,
  fetcher: Arc<dyn Fetcher>,
}

impl Transport {
  /// Create a transport using [`HttpFetcher`]
  pub fn new(config: Config) -> Result<Self> {
    Ok(Self::with_fetcher(config, Arc::new(HttpFetcher::new()?)))
  }

  /// Create a transport with an injected fetcher
  pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher>) -> Self {
    Self { config, fetcher }
  }

  /// Make a GET request to a CoinMarketCap endpoint
  ///
  /// Exactly one call is made to the fetcher; its result is returned as is.
  #[instrument(skip(self, endpoint, query), fields(endpoint = %endpoint))]
  pub async fn get(&self, endpoint: Endpoint, query: Query) -> Result<Value> {
    let request = self.build_request(endpoint, &query)?;
    debug!("Making request to: {}", request.url);

    self.fetcher.fetch(request).await
  }

  /// Build the request for an endpoint without sending it
  pub fn build_request(&self, endpoint: Endpoint, query: &Query) -> Result<FetchRequest> {
    Ok(FetchRequest {
      url: self.build_url(endpoint, query)?,
      headers: vec![
        (API_KEY_HEADER.to_string(), self.config.api_key.clone()),
        ("Accept".to_string(), "application/json".to_string()),
      ],
      config: self.config.fetch_config.clone(),
    })
  }

  /// Build the full URL for an API request
  fn build_url(&self, endpoint: Endpoint, query: &Query) -> Result<String> {
    let version = self
      .config
      .version
      .as_deref()
      .filter(|v| !v.is_empty())
      .unwrap_or(endpoint.version());
    let mut url = Url::parse(&format!(
      "{}/{}/{}",
      self.config.base_url.trim_end_matches('/'),
      version,
      endpoint.path()
    ))?;

    if !query.is_empty() {
      let mut pairs = url.query_pairs_mut();
      for (key, value) in query.iter() {
        pairs.append_pair(key, value);
      }
    }

    Ok(url.to_string())
  }

  /// Current configuration
  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Mutable configuration, read on every request
  pub fn config_mut(&mut self) -> &mut Config {
    &mut self.config
  }

  /// Replace the fetcher
  pub fn set_fetcher(&mut self, fetcher: Arc<dyn Fetcher>) {
    self.fetcher = fetcher;
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.config.base_url)
      .field("version", &self.config.version)
      .field("fetcher", &"dyn Fetcher")
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn mock_transport() -> Transport {
    Transport::with_fetcher(
      Config::new("test_key"),
      Arc::new(RecordingFetcher::new(json!({ "data": [] }))),
    )
  }

  #[test]
  fn test_build_request() {
    let transport = mock_transport();
    let mut query = Query::new();
    query.push("symbol", "BTC,ETH");

    let request = transport.build_request(Endpoint::CryptocurrencyMap, &query).unwrap();

    assert!(request.url.starts_with("https://pro-api.coinmarketcap.com/v1/cryptocurrency/map?"));
    assert_eq!(request.query_param("symbol").as_deref(), Some("BTC,ETH"));
    assert_eq!(request.header("x-cmc_pro_api_key"), Some("test_key"));
    assert_eq!(request.header("Accept"), Some("application/json"));
  }

  #[test]
  fn test_build_request_without_query() {
    let transport = mock_transport();
    let request =
      transport.build_request(Endpoint::GlobalMetricsQuotesLatest, &Query::new()).unwrap();

    assert_eq!(request.url, "https://pro-api.coinmarketcap.com/v1/global-metrics/quotes/latest");
    assert!(request.query_pairs().is_empty());
  }

  #[test]
  fn test_version_override() {
    let mut transport = mock_transport();
    transport.config_mut().version = Some("v3".to_string());

    let request = transport.build_request(Endpoint::QuotesLatest, &Query::new()).unwrap();
    assert_eq!(request.path().as_deref(), Some("/v3/cryptocurrency/quotes/latest"));
  }

  #[test]
  fn test_empty_version_override_uses_endpoint_version() {
    let mut transport = mock_transport();
    transport.config_mut().version = Some(String::new());

    let request = transport.build_request(Endpoint::CryptocurrencyMap, &Query::new()).unwrap();
    assert_eq!(request.url, "https://pro-api.coinmarketcap.com/v1/cryptocurrency/map");
  }

  #[test]
  fn test_trailing_slash_in_base_url() {
    let mut transport = mock_transport();
    transport.config_mut().base_url = "http://localhost:9000/".to_string();

    let request = transport.build_request(Endpoint::CryptocurrencyInfo, &Query::new()).unwrap();
    assert_eq!(request.url, "http://localhost:9000/v2/cryptocurrency/info");
  }

  #[test]
  fn test_invalid_base_url() {
    let mut transport = mock_transport();
    transport.config_mut().base_url = "not a url".to_string();

    let result = transport.build_request(Endpoint::CryptocurrencyMap, &Query::new());
    assert!(matches!(result, Err(Error::Url(_))));
  }

  #[test]
  fn test_fetch_config_forwarded() {
    let mut transport = mock_transport();
    transport.config_mut().fetch_config.insert("timeout".to_string(), json!(5000));

    let request = transport.build_request(Endpoint::ListingsLatest, &Query::new()).unwrap();
    assert_eq!(request.config["timeout"], 5000);
  }

  #[tokio::test]
  async fn test_get_passes_fetcher_result_through() {
    let fetcher = Arc::new(RecordingFetcher::new(json!({ "status": { "error_code": 1002 } })));
    let transport = Transport::with_fetcher(Config::new("test_key"), fetcher.clone());

    let value = transport.get(Endpoint::CryptocurrencyMap, Query::new()).await.unwrap();

    assert_eq!(value, json!({ "status": { "error_code": 1002 } }));
    assert_eq!(fetcher.call_count(), 1);
  }

  #[tokio::test]
  async fn test_get_passes_fetcher_error_through() {
    let fetcher = Arc::new(RecordingFetcher::failing("connection reset"));
    let transport = Transport::with_fetcher(Config::new("test_key"), fetcher.clone());

    let result = transport.get(Endpoint::CryptocurrencyMap, Query::new()).await;

    match result {
      Err(Error::Http(message)) => assert_eq!(message, "connection reset"),
      other => panic!("Expected Http error, got {:?}", other),
    }
  }
}
