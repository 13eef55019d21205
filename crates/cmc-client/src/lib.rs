//! # cmc-client
//!
//! A CoinMarketCap Pro API client for Rust.
//!
//! ## Features
//!
//! - **Flexible options**: list options accept a value, a comma separated
//!   string or a sequence and are normalized to the same query
//! - **Validated**: conflicting or missing options fail before any request
//! - **Pluggable transport**: requests go through a [`Fetcher`]; the default
//!   [`HttpFetcher`] uses reqwest, [`RecordingFetcher`] is a test double
//! - **Pass-through responses**: the parsed JSON body is returned untouched,
//!   typed views live in cmc-models
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cmc_client::{CoinMarketCapClient, IdMapOptions, MetadataOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinMarketCapClient::new("api key")?;
//!
//!     let ids = client.get_id_map(IdMapOptions::new().symbol("BTC,ETH")).await?;
//!     println!("{}", ids["data"]);
//!
//!     let info = client.get_metadata(MetadataOptions::by_id([1u64, 1027])).await?;
//!     println!("{}", info["data"]["1"]["name"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, cmc_core::Error>`. Option validation fails
//! with `Error::Validation`; fetcher failures are returned unchanged.

#![deny(missing_docs)]
#![warn(clippy::all)]

/// Client facade
pub mod client;
pub mod endpoints;
pub mod params;
pub mod transport;

// Re-export the main client and common types
pub use client::CoinMarketCapClient;
pub use cmc_core::{Config, Endpoint, Error, Result};
pub use cmc_models::*;
pub use params::{ListParam, Query};
pub use transport::{FetchRequest, Fetcher, HttpFetcher, RecordingFetcher, Transport};

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  cryptocurrency::{
    CryptocurrencyEndpoints, CryptocurrencyType, IdMapOptions, ListingStatus, MetadataOptions,
    QuotesOptions, SortDir, TickersOptions,
  },
  global_metrics::{GlobalMetricsEndpoints, GlobalOptions},
};
