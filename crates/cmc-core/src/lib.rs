pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};

/// The CoinMarketCap Pro endpoints supported by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  // Cryptocurrency
  CryptocurrencyMap,
  CryptocurrencyInfo,
  ListingsLatest,
  QuotesLatest,

  // Global metrics
  GlobalMetricsQuotesLatest,
}

impl Endpoint {
  /// Path below the version segment, without a leading slash.
  pub fn path(&self) -> &'static str {
    match self {
      Endpoint::CryptocurrencyMap => "cryptocurrency/map",
      Endpoint::CryptocurrencyInfo => "cryptocurrency/info",
      Endpoint::ListingsLatest => "cryptocurrency/listings/latest",
      Endpoint::QuotesLatest => "cryptocurrency/quotes/latest",
      Endpoint::GlobalMetricsQuotesLatest => "global-metrics/quotes/latest",
    }
  }

  /// API version each endpoint is served under.
  pub fn version(&self) -> &'static str {
    match self {
      Endpoint::CryptocurrencyInfo | Endpoint::QuotesLatest => "v2",
      Endpoint::CryptocurrencyMap
      | Endpoint::ListingsLatest
      | Endpoint::GlobalMetricsQuotesLatest => "v1",
    }
  }
}

impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}/{}", self.version(), self.path())
  }
}

/// Base URL for the CoinMarketCap Pro API
pub const CMC_BASE_URL: &str = "https://pro-api.coinmarketcap.com";

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

/// Currency quotes are converted to when the caller does not ask for one
pub const DEFAULT_CONVERT: &str = "USD";
