//! Cryptocurrency endpoints
//!
//! - `v1/cryptocurrency/map`: CoinMarketCap id map
//! - `v2/cryptocurrency/info`: static metadata
//! - `v1/cryptocurrency/listings/latest`: ranked market listings
//! - `v2/cryptocurrency/quotes/latest`: latest market quotes
//!
//! Each endpoint takes an options struct whose fields are all optional.
//! `to_query` validates the options and fills in defaults; it never touches
//! the network.

use super::id_or_symbol;
use crate::params::{present, ListParam, Query};
use crate::transport::Transport;
use cmc_core::{Endpoint, Error, Result, DEFAULT_CONVERT};
use serde_json::Value;
use std::fmt;
use tracing::instrument;

/// Listing status filter for the id map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingStatus {
  /// Currently listed
  #[default]
  Active,
  /// Delisted
  Inactive,
  /// Listed but without market data
  Untracked,
}

impl ListingStatus {
  /// Wire value
  pub fn as_str(&self) -> &'static str {
    match self {
      ListingStatus::Active => "active",
      ListingStatus::Inactive => "inactive",
      ListingStatus::Untracked => "untracked",
    }
  }
}

/// Sort direction for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
  /// Ascending
  Asc,
  /// Descending
  Desc,
}

impl SortDir {
  /// Wire value
  pub fn as_str(&self) -> &'static str {
    match self {
      SortDir::Asc => "asc",
      SortDir::Desc => "desc",
    }
  }
}

/// Kind of cryptocurrency included in listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CryptocurrencyType {
  /// Coins and tokens
  #[default]
  All,
  /// Coins only
  Coins,
  /// Tokens only
  Tokens,
}

impl CryptocurrencyType {
  /// Wire value
  pub fn as_str(&self) -> &'static str {
    match self {
      CryptocurrencyType::All => "all",
      CryptocurrencyType::Coins => "coins",
      CryptocurrencyType::Tokens => "tokens",
    }
  }
}

macro_rules! impl_display_as_str {
  ($($ty:ty),*) => {
    $(
      impl fmt::Display for $ty {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
          f.write_str(self.as_str())
        }
      }
    )*
  };
}

impl_display_as_str!(ListingStatus, SortDir, CryptocurrencyType);

/// Options for `v1/cryptocurrency/map`
///
/// Defaults: `listing_status=active`, `start=1`, `sort=id`. When `symbol` is
/// set it is the only parameter sent and the other options are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdMapOptions {
  /// Sent as `listing_status`
  pub listing_status: Option<ListingStatus>,
  /// 1-based offset
  pub start: Option<u32>,
  /// Page size, unset means all
  pub limit: Option<u32>,
  /// Restrict the map to these symbols
  pub symbol: Option<ListParam>,
  /// Sort field
  pub sort: Option<String>,
}

impl IdMapOptions {
  /// Empty options, every default applies
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the listing status filter
  pub fn listing_status(mut self, listing_status: ListingStatus) -> Self {
    self.listing_status = Some(listing_status);
    self
  }

  /// Set the offset
  pub fn start(mut self, start: u32) -> Self {
    self.start = Some(start);
    self
  }

  /// Set the page size
  pub fn limit(mut self, limit: u32) -> Self {
    self.limit = Some(limit);
    self
  }

  /// Filter by symbol(s); other options are then ignored
  pub fn symbol(mut self, symbol: impl Into<ListParam>) -> Self {
    self.symbol = Some(symbol.into());
    self
  }

  /// Sort field, e.g. `id` or `cmc_rank`
  pub fn sort(mut self, sort: impl Into<String>) -> Self {
    self.sort = Some(sort.into());
    self
  }

  /// Build the query with defaults filled in
  pub fn to_query(&self) -> Result<Query> {
    let mut query = Query::new();

    if let Some(symbol) = present(&self.symbol) {
      query.push("symbol", symbol.join_csv());
      return Ok(query);
    }

    query.push("listing_status", self.listing_status.unwrap_or_default());
    query.push("start", self.start.unwrap_or(1));
    query.push_opt("limit", self.limit);
    query.push("sort", self.sort.as_deref().unwrap_or("id"));

    Ok(query)
  }
}

impl From<()> for IdMapOptions {
  fn from(_: ()) -> Self {
    Self::default()
  }
}

/// Options for `v2/cryptocurrency/info`
///
/// Exactly one of `id` or `symbol` is required.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataOptions {
  /// CoinMarketCap id(s)
  pub id: Option<ListParam>,
  /// Ticker symbol(s)
  pub symbol: Option<ListParam>,
}

impl MetadataOptions {
  /// Empty options; one of `id` or `symbol` must be set before use
  pub fn new() -> Self {
    Self::default()
  }

  /// Look up by CoinMarketCap id(s)
  pub fn by_id(id: impl Into<ListParam>) -> Self {
    Self::new().id(id)
  }

  /// Look up by ticker symbol(s)
  pub fn by_symbol(symbol: impl Into<ListParam>) -> Self {
    Self::new().symbol(symbol)
  }

  /// Set the id(s)
  pub fn id(mut self, id: impl Into<ListParam>) -> Self {
    self.id = Some(id.into());
    self
  }

  /// Set the symbol(s)
  pub fn symbol(mut self, symbol: impl Into<ListParam>) -> Self {
    self.symbol = Some(symbol.into());
    self
  }

  /// Validate the `id`/`symbol` pair and build the query
  pub fn to_query(&self) -> Result<Query> {
    let (key, value) = id_or_symbol(&self.id, &self.symbol)?;

    let mut query = Query::new();
    query.push(key, value);
    Ok(query)
  }
}

impl From<()> for MetadataOptions {
  fn from(_: ()) -> Self {
    Self::default()
  }
}

/// Options for `v1/cryptocurrency/listings/latest`
///
/// Defaults: `start=1`, `limit=100`, `convert=USD`, `sort=market_cap`,
/// `cryptocurrency_type=all`. `sort_dir` is only sent when set.
///
/// `currency` and `id` select a single asset and cannot be combined with
/// `start`/`limit` or with each other. They are accepted for validation only;
/// the listings endpoint has no such filters, so neither is sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickersOptions {
  /// 1-based offset, default 1
  pub start: Option<u32>,
  /// Page size, default 100
  pub limit: Option<u32>,
  /// Quote currencies, default USD
  pub convert: Option<ListParam>,
  /// Sort field, default `market_cap`
  pub sort: Option<String>,
  /// Sort direction, omitted unless set
  pub sort_dir: Option<SortDir>,
  /// Default `all`
  pub cryptocurrency_type: Option<CryptocurrencyType>,
  /// Single asset selector, validation only
  pub currency: Option<String>,
  /// Single asset selector by id, validation only
  pub id: Option<ListParam>,
}

impl TickersOptions {
  /// Empty options, every default applies
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the offset
  pub fn start(mut self, start: u32) -> Self {
    self.start = Some(start);
    self
  }

  /// Number of results, 1..=5000
  pub fn limit(mut self, limit: u32) -> Self {
    self.limit = Some(limit);
    self
  }

  /// Set the quote currencies
  pub fn convert(mut self, convert: impl Into<ListParam>) -> Self {
    self.convert = Some(convert.into());
    self
  }

  /// Sort field, e.g. `market_cap`, `name`, `price`
  pub fn sort(mut self, sort: impl Into<String>) -> Self {
    self.sort = Some(sort.into());
    self
  }

  /// Set the sort direction
  pub fn sort_dir(mut self, sort_dir: SortDir) -> Self {
    self.sort_dir = Some(sort_dir);
    self
  }

  /// Restrict to coins or tokens
  pub fn cryptocurrency_type(mut self, cryptocurrency_type: CryptocurrencyType) -> Self {
    self.cryptocurrency_type = Some(cryptocurrency_type);
    self
  }

  /// Select a single asset by slug
  pub fn currency(mut self, currency: impl Into<String>) -> Self {
    self.currency = Some(currency.into());
    self
  }

  /// Select a single asset by id
  pub fn id(mut self, id: impl Into<ListParam>) -> Self {
    self.id = Some(id.into());
    self
  }

  /// Validate the selectors and build the query
  ///
  /// Fails with [`Error::Validation`] when `currency` or `id` is combined
  /// with `start`/`limit`, or when both selectors are set.
  pub fn to_query(&self) -> Result<Query> {
    let has_currency = self.currency.as_deref().is_some_and(|c| !c.is_empty());
    let has_id = present(&self.id).is_some();
    let selects_asset = has_currency || has_id;

    if selects_asset && (self.start.is_some() || self.limit.is_some()) {
      return Err(Error::validation("start and limit cannot be combined with currency or id"));
    }
    if has_currency && has_id {
      return Err(Error::validation("currency and id cannot both be specified"));
    }

    let mut query = Query::new();
    query.push("start", self.start.unwrap_or(1));
    query.push("limit", self.limit.unwrap_or(100));

    query.push("convert", convert_or_default(&self.convert));
    query.push("sort", self.sort.as_deref().unwrap_or("market_cap"));
    query.push_opt("sort_dir", self.sort_dir);
    query.push("cryptocurrency_type", self.cryptocurrency_type.unwrap_or_default());

    Ok(query)
  }
}

impl From<()> for TickersOptions {
  fn from(_: ()) -> Self {
    Self::default()
  }
}

/// Options for `v2/cryptocurrency/quotes/latest`
///
/// Exactly one of `id` or `symbol` is required. `convert` defaults to USD.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuotesOptions {
  /// CoinMarketCap id(s)
  pub id: Option<ListParam>,
  /// Ticker symbol(s)
  pub symbol: Option<ListParam>,
  /// Quote currencies, default USD
  pub convert: Option<ListParam>,
}

impl QuotesOptions {
  /// Empty options; one of `id` or `symbol` must be set before use
  pub fn new() -> Self {
    Self::default()
  }

  /// Quotes by CoinMarketCap id(s)
  pub fn by_id(id: impl Into<ListParam>) -> Self {
    Self::new().id(id)
  }

  /// Quotes by ticker symbol(s)
  pub fn by_symbol(symbol: impl Into<ListParam>) -> Self {
    Self::new().symbol(symbol)
  }

  /// Set the id(s)
  pub fn id(mut self, id: impl Into<ListParam>) -> Self {
    self.id = Some(id.into());
    self
  }

  /// Set the symbol(s)
  pub fn symbol(mut self, symbol: impl Into<ListParam>) -> Self {
    self.symbol = Some(symbol.into());
    self
  }

  /// Set the quote currencies
  pub fn convert(mut self, convert: impl Into<ListParam>) -> Self {
    self.convert = Some(convert.into());
    self
  }

  /// Validate the `id`/`symbol` pair and build the query
  pub fn to_query(&self) -> Result<Query> {
    let (key, value) = id_or_symbol(&self.id, &self.symbol)?;

    let mut query = Query::new();
    query.push(key, value);
    query.push("convert", convert_or_default(&self.convert));
    Ok(query)
  }
}

impl From<()> for QuotesOptions {
  fn from(_: ()) -> Self {
    Self::default()
  }
}

pub(crate) fn convert_or_default(convert: &Option<ListParam>) -> String {
  present(convert).map(ListParam::join_csv).unwrap_or_else(|| DEFAULT_CONVERT.to_string())
}

/// Cryptocurrency endpoints
pub struct CryptocurrencyEndpoints<'a> {
  transport: &'a Transport,
}

impl<'a> CryptocurrencyEndpoints<'a> {
  /// Create a new cryptocurrency endpoints instance
  pub fn new(transport: &'a Transport) -> Self {
    Self { transport }
  }

  /// Get the CoinMarketCap id map
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use cmc_client::{CoinMarketCapClient, IdMapOptions, ListingStatus};
  /// # async fn run(client: CoinMarketCapClient) -> cmc_client::Result<()> {
  /// let active = client.cryptocurrency().id_map(()).await?;
  /// let inactive = client
  ///   .cryptocurrency()
  ///   .id_map(IdMapOptions::new().listing_status(ListingStatus::Inactive).limit(10))
  ///   .await?;
  /// let some = client.cryptocurrency().id_map(IdMapOptions::new().symbol(["BTC", "ETH"])).await?;
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, options))]
  pub async fn id_map(&self, options: impl Into<IdMapOptions>) -> Result<Value> {
    let query = options.into().to_query()?;
    self.transport.get(Endpoint::CryptocurrencyMap, query).await
  }

  /// Get static metadata for one or more cryptocurrencies
  ///
  /// Fails with [`Error::Validation`] before any request when neither or both
  /// of `id` and `symbol` are given.
  #[instrument(skip(self, options))]
  pub async fn metadata(&self, options: impl Into<MetadataOptions>) -> Result<Value> {
    let query = options.into().to_query()?;
    self.transport.get(Endpoint::CryptocurrencyInfo, query).await
  }

  /// Get the latest ranked listings
  #[instrument(skip(self, options))]
  pub async fn listings_latest(&self, options: impl Into<TickersOptions>) -> Result<Value> {
    let query = options.into().to_query()?;
    self.transport.get(Endpoint::ListingsLatest, query).await
  }

  /// Get the latest market quotes for one or more cryptocurrencies
  #[instrument(skip(self, options))]
  pub async fn quotes_latest(&self, options: impl Into<QuotesOptions>) -> Result<Value> {
    let query = options.into().to_query()?;
    self.transport.get(Endpoint::QuotesLatest, query).await
  }
}
