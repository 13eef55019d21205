//! Payload types for `v1/global-metrics/quotes/latest`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate market metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalMetrics {
  pub active_cryptocurrencies: Option<u64>,
  pub total_cryptocurrencies: Option<u64>,
  pub active_market_pairs: Option<u64>,
  pub active_exchanges: Option<u64>,
  pub total_exchanges: Option<u64>,
  pub eth_dominance: Option<f64>,
  pub btc_dominance: Option<f64>,
  pub last_updated: Option<String>,

  /// Totals keyed by the convert currency
  #[serde(default)]
  pub quote: BTreeMap<String, GlobalQuote>,
}

/// Market totals in one convert currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalQuote {
  pub total_market_cap: Option<f64>,
  pub total_volume_24h: Option<f64>,
  pub altcoin_market_cap: Option<f64>,
  pub altcoin_volume_24h: Option<f64>,
  pub last_updated: Option<String>,
}
