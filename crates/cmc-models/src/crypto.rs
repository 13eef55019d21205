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

//! Payload types for the `cryptocurrency/*` endpoints

use crate::common::OneOrMany;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `data` of `v1/cryptocurrency/map`
pub type IdMapData = Vec<IdMapEntry>;

/// `data` of `v2/cryptocurrency/info`, keyed by the requested id or symbol
pub type MetadataData = BTreeMap<String, OneOrMany<CryptoInfo>>;

/// `data` of `v1/cryptocurrency/listings/latest`
pub type ListingsData = Vec<Listing>;

/// `data` of `v2/cryptocurrency/quotes/latest`, keyed by the requested id or symbol
pub type QuotesData = BTreeMap<String, OneOrMany<Listing>>;

/// One row of the CoinMarketCap id map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdMapEntry {
  pub id: u64,
  pub rank: Option<u32>,
  pub name: String,
  pub symbol: String,
  pub slug: String,
  pub is_active: Option<u8>,
  pub first_historical_data: Option<String>,
  pub last_historical_data: Option<String>,
  pub platform: Option<Platform>,
}

/// Chain a token is issued on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
  pub id: u64,
  pub name: String,
  pub symbol: String,
  pub slug: String,
  pub token_address: Option<String>,
}

/// Static metadata for a cryptocurrency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoInfo {
  pub id: u64,
  pub name: String,
  pub symbol: String,
  pub slug: String,
  pub category: Option<String>,
  pub description: Option<String>,
  pub logo: Option<String>,
  pub tags: Option<Vec<String>>,

  /// Link groups such as `website`, `explorer`, `source_code`
  #[serde(default)]
  pub urls: BTreeMap<String, Vec<String>>,

  pub date_added: Option<String>,
  pub platform: Option<Platform>,
}

/// Market listing of a cryptocurrency, also returned by the quotes endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
  pub id: u64,
  pub name: String,
  pub symbol: String,
  pub slug: String,
  pub cmc_rank: Option<u32>,
  pub num_market_pairs: Option<u32>,
  pub circulating_supply: Option<f64>,
  pub total_supply: Option<f64>,
  pub max_supply: Option<f64>,
  pub date_added: Option<String>,
  pub last_updated: Option<String>,
  pub tags: Option<Vec<String>>,
  pub platform: Option<Platform>,

  /// Market data keyed by the convert currency (e.g. "USD")
  #[serde(default)]
  pub quote: BTreeMap<String, Quote>,
}

/// Market data in one convert currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
  pub price: Option<f64>,
  pub volume_24h: Option<f64>,
  pub volume_change_24h: Option<f64>,
  pub percent_change_1h: Option<f64>,
  pub percent_change_24h: Option<f64>,
  pub percent_change_7d: Option<f64>,
  pub market_cap: Option<f64>,
  pub market_cap_dominance: Option<f64>,
  pub fully_diluted_market_cap: Option<f64>,
  pub last_updated: Option<String>,
}
