/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use crate::endpoints::{
  cryptocurrency::{
    CryptocurrencyEndpoints, IdMapOptions, MetadataOptions, QuotesOptions, TickersOptions,
  },
  global_metrics::{GlobalMetricsEndpoints, GlobalOptions},
};
use crate::transport::{Fetcher, Transport};
use cmc_core::{Config, Result};
use serde_json::Value;
use std::sync::Arc;

/// Main CoinMarketCap API client
///
/// Every operation validates its options, builds one request and returns the
/// fetcher's result untouched. Invalid options fail before anything is sent.
///
/// # Examples
///
/// ```rust,no_run
/// use cmc_client::{CoinMarketCapClient, QuotesOptions, TickersOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinMarketCapClient::from_env()?;
///
///     let top = client.get_tickers(TickersOptions::new().limit(3)).await?;
///     println!("{}", top["data"]);
///
///     let quotes = client.get_quotes(QuotesOptions::by_symbol(["BTC", "ETH"])).await?;
///     println!("{}", quotes["data"]["BTC"]);
///
///     Ok(())
/// }
/// ```
pub struct CoinMarketCapClient {
  transport: Transport,
}

impl CoinMarketCapClient {
  /// Create a client with default settings and the HTTP fetcher
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(api_key: impl Into<String>) -> Result<Self> {
    Self::with_config(Config::new(api_key))
  }

  /// Create a client from a full configuration
  pub fn with_config(config: Config) -> Result<Self> {
    Ok(Self { transport: Transport::new(config)? })
  }

  /// Create a client that sends requests through `fetcher`
  pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher>) -> Self {
    Self { transport: Transport::with_fetcher(config, fetcher) }
  }

  /// Create a client from `CMC_*` environment variables
  pub fn from_env() -> Result<Self> {
    Self::with_config(Config::from_env()?)
  }

  /// Current configuration
  pub fn config(&self) -> &Config {
    self.transport.config()
  }

  /// Reconfigure the client in place
  pub fn config_mut(&mut self) -> &mut Config {
    self.transport.config_mut()
  }

  /// Swap the fetcher used for subsequent requests
  pub fn set_fetcher(&mut self, fetcher: Arc<dyn Fetcher>) {
    self.transport.set_fetcher(fetcher);
  }

  /// Get access to cryptocurrency endpoints
  pub fn cryptocurrency(&self) -> CryptocurrencyEndpoints<'_> {
    CryptocurrencyEndpoints::new(&self.transport)
  }

  /// Get access to global metrics endpoints
  pub fn global_metrics(&self) -> GlobalMetricsEndpoints<'_> {
    GlobalMetricsEndpoints::new(&self.transport)
  }

  /// Paginated CoinMarketCap id map (`v1/cryptocurrency/map`)
  pub async fn get_id_map(&self, options: impl Into<IdMapOptions>) -> Result<Value> {
    self.cryptocurrency().id_map(options).await
  }

  /// Static metadata (`v2/cryptocurrency/info`); exactly one of id or symbol
  pub async fn get_metadata(&self, options: impl Into<MetadataOptions>) -> Result<Value> {
    self.cryptocurrency().metadata(options).await
  }

  /// Latest listings (`v1/cryptocurrency/listings/latest`)
  pub async fn get_tickers(&self, options: impl Into<TickersOptions>) -> Result<Value> {
    self.cryptocurrency().listings_latest(options).await
  }

  /// Latest quotes (`v2/cryptocurrency/quotes/latest`); exactly one of id or symbol
  pub async fn get_quotes(&self, options: impl Into<QuotesOptions>) -> Result<Value> {
    self.cryptocurrency().quotes_latest(options).await
  }

  /// Global metrics (`v1/global-metrics/quotes/latest`)
  pub async fn get_global(&self, options: impl Into<GlobalOptions>) -> Result<Value> {
    self.global_metrics().quotes_latest(options).await
  }
}

impl std::fmt::Debug for CoinMarketCapClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CoinMarketCapClient").field("transport", &self.transport).finish()
  }
}
