//! Global market metrics endpoints

use super::cryptocurrency::convert_or_default;
use crate::params::{ListParam, Query};
use crate::transport::Transport;
use cmc_core::{Endpoint, Result};
use serde_json::Value;
use tracing::instrument;

/// Options for `v1/global-metrics/quotes/latest`
///
/// `convert` defaults to USD. A bare string or sequence converts into these
/// options as the `convert` value, so `"GBP"` and
/// `GlobalOptions::new().convert("GBP")` are the same request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalOptions {
  /// Quote currencies, default USD
  pub convert: Option<ListParam>,
}

impl GlobalOptions {
  /// Empty options, USD applies
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the quote currencies
  pub fn convert(mut self, convert: impl Into<ListParam>) -> Self {
    self.convert = Some(convert.into());
    self
  }

  /// Build the query
  pub fn to_query(&self) -> Result<Query> {
    let mut query = Query::new();
    query.push("convert", convert_or_default(&self.convert));
    Ok(query)
  }
}

impl From<()> for GlobalOptions {
  fn from(_: ()) -> Self {
    Self::default()
  }
}

impl From<ListParam> for GlobalOptions {
  fn from(convert: ListParam) -> Self {
    Self { convert: Some(convert) }
  }
}

macro_rules! impl_convert_shorthand {
  ($($ty:ty),*) => {
    $(
      impl From<$ty> for GlobalOptions {
        fn from(convert: $ty) -> Self {
          Self::from(ListParam::from(convert))
        }
      }
    )*
  };
}

impl_convert_shorthand!(&str, String, &String, Vec<&str>, Vec<String>, &[&str]);

impl<const N: usize> From<[&str; N]> for GlobalOptions {
  fn from(convert: [&str; N]) -> Self {
    Self::from(ListParam::from(convert))
  }
}

/// Global metrics endpoints
pub struct GlobalMetricsEndpoints<'a> {
  transport: &'a Transport,
}

impl<'a> GlobalMetricsEndpoints<'a> {
  /// Create a new global metrics endpoints instance
  pub fn new(transport: &'a Transport) -> Self {
    Self { transport }
  }

  /// Get the latest global market metrics
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use cmc_client::{CoinMarketCapClient, GlobalOptions};
  /// # async fn run(client: CoinMarketCapClient) -> cmc_client::Result<()> {
  /// let in_gbp = client.global_metrics().quotes_latest("GBP").await?;
  /// let same = client.global_metrics().quotes_latest(GlobalOptions::new().convert("GBP")).await?;
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, options))]
  pub async fn quotes_latest(&self, options: impl Into<GlobalOptions>) -> Result<Value> {
    let query = options.into().to_query()?;
    self.transport.get(Endpoint::GlobalMetricsQuotesLatest, query).await
  }
}
