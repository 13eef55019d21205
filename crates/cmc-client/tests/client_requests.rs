//! Outbound request shape for every client operation, observed through a
//! recording fetcher.

use cmc_client::{
  CoinMarketCapClient, Config, Error, GlobalOptions, IdMapOptions, MetadataOptions, QuotesOptions,
  RecordingFetcher, SortDir, TickersOptions,
};
use serde_json::json;
use std::sync::Arc;

fn setup() -> (CoinMarketCapClient, Arc<RecordingFetcher>) {
  let _ = tracing_subscriber::fmt().with_test_writer().try_init();

  let fetcher = Arc::new(RecordingFetcher::new(json!({
    "status": { "timestamp": "2024-05-01T12:00:00.000Z", "error_code": 0, "elapsed": 1, "credit_count": 1 },
    "data": {}
  })));
  let client = CoinMarketCapClient::with_fetcher(Config::new("test_key"), fetcher.clone());
  (client, fetcher)
}

fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
  list.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[tokio::test]
async fn test_metadata_symbol_csv_and_sequence_are_identical() {
  let (client, fetcher) = setup();

  client.get_metadata(MetadataOptions::by_symbol("BTC,ETH")).await.unwrap();
  client.get_metadata(MetadataOptions::by_symbol(vec!["BTC", "ETH"])).await.unwrap();

  let calls = fetcher.calls();
  assert_eq!(calls.len(), 2);
  assert_eq!(calls[0].url, calls[1].url);
  assert_eq!(calls[0].query_pairs(), pairs(&[("symbol", "BTC,ETH")]));
}

#[tokio::test]
async fn test_metadata_validation_never_fetches() {
  let (client, fetcher) = setup();

  let missing = client.get_metadata(()).await;
  assert!(matches!(missing, Err(Error::Validation(_))));

  let both = client.get_metadata(MetadataOptions::by_id("1").symbol("BTC")).await;
  match both {
    Err(Error::Validation(message)) => {
      assert_eq!(message, "id and symbol cannot both be specified")
    }
    other => panic!("Expected validation error, got {:?}", other),
  }

  assert_eq!(fetcher.call_count(), 0);
}

#[tokio::test]
async fn test_metadata_by_id() {
  let (client, fetcher) = setup();

  client.get_metadata(MetadataOptions::by_id("1")).await.unwrap();

  assert_eq!(fetcher.call_count(), 1);
  let request = fetcher.last_request().unwrap();
  assert_eq!(request.path().as_deref(), Some("/v2/cryptocurrency/info"));
  assert_eq!(request.query_param("id").as_deref(), Some("1"));
  assert!(request.query_param("symbol").is_none());
  assert_eq!(request.header("X-CMC_PRO_API_KEY"), Some("test_key"));
}

#[tokio::test]
async fn test_tickers_limit_with_defaults() {
  let (client, fetcher) = setup();

  client.get_tickers(TickersOptions::new().limit(3)).await.unwrap();

  let request = fetcher.last_request().unwrap();
  assert_eq!(request.path().as_deref(), Some("/v1/cryptocurrency/listings/latest"));
  assert_eq!(
    request.query_pairs(),
    pairs(&[
      ("start", "1"),
      ("limit", "3"),
      ("convert", "USD"),
      ("sort", "market_cap"),
      ("cryptocurrency_type", "all"),
    ])
  );
}

#[tokio::test]
async fn test_tickers_sort_dir_only_when_set() {
  let (client, fetcher) = setup();

  client.get_tickers(()).await.unwrap();
  client.get_tickers(TickersOptions::new().sort("name").sort_dir(SortDir::Desc)).await.unwrap();

  let calls = fetcher.calls();
  assert!(calls[0].query_param("sort_dir").is_none());
  assert_eq!(calls[1].query_param("sort_dir").as_deref(), Some("desc"));
  assert_eq!(calls[1].query_param("sort").as_deref(), Some("name"));
}

#[tokio::test]
async fn test_tickers_exclusive_groups_never_fetch() {
  let (client, fetcher) = setup();

  let result = client.get_tickers(TickersOptions::new().id("1").start(5)).await;

  assert!(matches!(result, Err(Error::Validation(_))));
  assert_eq!(fetcher.call_count(), 0);
}

#[tokio::test]
async fn test_quotes() {
  let (client, fetcher) = setup();

  client.get_quotes(QuotesOptions::by_id(vec![1u64, 2]).convert("USD,EUR")).await.unwrap();
  let request = fetcher.last_request().unwrap();
  assert_eq!(request.path().as_deref(), Some("/v2/cryptocurrency/quotes/latest"));
  assert_eq!(request.query_pairs(), pairs(&[("id", "1,2"), ("convert", "USD,EUR")]));

  client.get_quotes(QuotesOptions::by_symbol(["BTC", "ETH"])).await.unwrap();
  let request = fetcher.last_request().unwrap();
  assert_eq!(request.query_pairs(), pairs(&[("symbol", "BTC,ETH"), ("convert", "USD")]));

  let result = client.get_quotes(()).await;
  assert!(matches!(result, Err(Error::Validation(_))));
  assert_eq!(fetcher.call_count(), 2);
}

#[tokio::test]
async fn test_global_shorthand_and_options_are_identical() {
  let (client, fetcher) = setup();

  client.get_global("GBP").await.unwrap();
  client.get_global(GlobalOptions::new().convert("GBP")).await.unwrap();

  let calls = fetcher.calls();
  assert_eq!(calls[0], calls[1]);
  assert_eq!(calls[0].path().as_deref(), Some("/v1/global-metrics/quotes/latest"));
  assert_eq!(calls[0].query_pairs(), pairs(&[("convert", "GBP")]));
}

#[tokio::test]
async fn test_id_map_without_options() {
  let (client, fetcher) = setup();

  client.get_id_map(()).await.unwrap();

  let request = fetcher.last_request().unwrap();
  assert_eq!(request.path().as_deref(), Some("/v1/cryptocurrency/map"));
  assert_eq!(
    request.query_pairs(),
    pairs(&[("listing_status", "active"), ("start", "1"), ("sort", "id")])
  );
  assert!(request.query_param("symbol").is_none());
  assert!(request.query_param("limit").is_none());
}

#[tokio::test]
async fn test_id_map_symbol_switches_filter_mode() {
  let (client, fetcher) = setup();

  client.get_id_map(IdMapOptions::new().limit(10).symbol(["BTC", "ETH"])).await.unwrap();

  let request = fetcher.last_request().unwrap();
  assert_eq!(request.query_pairs(), pairs(&[("symbol", "BTC,ETH")]));
}

#[tokio::test]
async fn test_identical_options_give_identical_requests() {
  let (client, fetcher) = setup();
  let options = TickersOptions::new().convert(["EUR", "GBP"]).sort("price");

  client.get_tickers(options.clone()).await.unwrap();
  client.get_tickers(options).await.unwrap();

  let calls = fetcher.calls();
  assert_eq!(calls.len(), 2);
  assert_eq!(calls[0], calls[1]);
}

#[tokio::test]
async fn test_response_returned_unmodified() {
  let upstream = json!({
    "status": {
      "timestamp": "2024-05-01T12:00:00.000Z",
      "error_code": 1001,
      "error_message": "This API Key is invalid.",
      "elapsed": 0,
      "credit_count": 0
    }
  });
  let fetcher = Arc::new(RecordingFetcher::new(upstream.clone()));
  let client = CoinMarketCapClient::with_fetcher(Config::new("bad_key"), fetcher);

  let value = client.get_global(()).await.unwrap();

  assert_eq!(value, upstream);
  let envelope: cmc_client::Envelope<cmc_client::GlobalMetrics> =
    cmc_client::Envelope::from_value(value).unwrap();
  assert!(envelope.status.is_error());
}

#[tokio::test]
async fn test_fetcher_error_passes_through() {
  let fetcher = Arc::new(RecordingFetcher::failing("dns failure"));
  let client = CoinMarketCapClient::with_fetcher(Config::new("test_key"), fetcher.clone());

  let result = client.get_id_map(()).await;

  match result {
    Err(Error::Http(message)) => assert_eq!(message, "dns failure"),
    other => panic!("Expected Http error, got {:?}", other),
  }
  assert_eq!(fetcher.call_count(), 1);
}

#[tokio::test]
async fn test_fetch_config_reaches_fetcher() {
  let fetcher = Arc::new(RecordingFetcher::new(json!({})));
  let config = Config::new("test_key")
    .with_fetch_option("timeout", 1500)
    .with_fetch_option("headers", json!({ "X-Trace": "abc" }));
  let client = CoinMarketCapClient::with_fetcher(config, fetcher.clone());

  client.get_global(()).await.unwrap();

  let request = fetcher.last_request().unwrap();
  assert_eq!(request.config["timeout"], 1500);
  assert_eq!(request.config["headers"]["X-Trace"], "abc");
}

#[tokio::test]
async fn test_tickers_by_currency_keeps_paging_defaults() {
  let (client, fetcher) = setup();

  client.get_tickers(TickersOptions::new().currency("bitcoin")).await.unwrap();

  let request = fetcher.last_request().unwrap();
  assert_eq!(request.query_param("start").as_deref(), Some("1"));
  assert_eq!(request.query_param("limit").as_deref(), Some("100"));
  assert!(request.query_param("currency").is_none());
}
