//! Market Overview Example
//!
//! Prints global metrics, the top listings and a few quotes.
//!
//! Requires `CMC_PRO_API_KEY` in the environment or a `.env` file.

use cmc_client::{
  CoinMarketCapClient, Envelope, GlobalMetrics, ListingsData, QuotesData, QuotesOptions,
  TickersOptions,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  // Initialize logging
  tracing_subscriber::fmt::init();

  let client = CoinMarketCapClient::from_env().map_err(|e| {
    error!("Failed to load configuration: {}", e);
    e
  })?;

  let global: Envelope<GlobalMetrics> = Envelope::from_value(client.get_global("USD").await?)?;
  if global.status.is_error() {
    error!(
      "CoinMarketCap error {}: {}",
      global.status.error_code,
      global.status.error_message.unwrap_or_default()
    );
    return Ok(());
  }
  if let Some(metrics) = global.data {
    let usd = metrics.quote.get("USD");
    info!(
      "Active cryptocurrencies: {:?}, BTC dominance: {:?}%, total market cap: {:?}",
      metrics.active_cryptocurrencies,
      metrics.btc_dominance,
      usd.and_then(|q| q.total_market_cap)
    );
  }

  let listings: Envelope<ListingsData> =
    Envelope::from_value(client.get_tickers(TickersOptions::new().limit(5)).await?)?;
  for listing in listings.data.unwrap_or_default() {
    let price = listing.quote.get("USD").and_then(|q| q.price);
    let price = price.map(|p| format!("{:.2}", p)).unwrap_or_else(|| "-".to_string());
    println!("#{:<3} {:<6} {:>14}", listing.cmc_rank.unwrap_or(0), listing.symbol, price);
  }

  let quotes: Envelope<QuotesData> = Envelope::from_value(
    client.get_quotes(QuotesOptions::by_symbol(["BTC", "ETH"]).convert("EUR")).await?,
  )?;
  for (symbol, entries) in quotes.data.unwrap_or_default() {
    for entry in entries.into_vec() {
      let price = entry.quote.get("EUR").and_then(|q| q.price);
      println!("{} ({}): {:?} EUR", symbol, entry.name, price);
    }
  }

  Ok(())
}
